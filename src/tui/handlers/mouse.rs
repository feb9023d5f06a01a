use crate::tui::app::{App, InputMode, Section};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Handle mouse events
pub fn handle_mouse(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.handle_mouse_click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollDown if app.input_mode == InputMode::Normal => {
            if app.section == Section::Publications {
                app.next_publication();
            } else {
                app.scroll_down();
            }
        }
        MouseEventKind::ScrollUp if app.input_mode == InputMode::Normal => {
            if app.section == Section::Publications {
                app.previous_publication();
            } else {
                app.scroll_up();
            }
        }
        _ => {}
    }
}
