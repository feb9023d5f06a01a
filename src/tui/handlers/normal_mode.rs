use crate::tui::app::{App, Section};
use crossterm::event::{KeyCode, KeyEvent};
use std::io;

/// Handle Normal mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc => app.show_help = false,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_section(),
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c as usize - '1' as usize;
            app.select_section(Section::ALL[idx]);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.section == Section::Publications {
                app.next_publication();
            } else {
                app.scroll_down();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.section == Section::Publications {
                app.previous_publication();
            } else {
                app.scroll_up();
            }
        }
        KeyCode::PageDown | KeyCode::Char('J') => {
            for _ in 0..5 {
                app.scroll_down();
            }
        }
        KeyCode::PageUp | KeyCode::Char('K') => {
            for _ in 0..5 {
                app.scroll_up();
            }
        }
        KeyCode::Char('m') | KeyCode::Enter if app.section == Section::Experience => {
            app.toggle_experience();
        }
        KeyCode::Char('c') | KeyCode::Enter if app.section == Section::Publications => {
            app.open_cite();
        }
        KeyCode::Char('o') if app.section == Section::Publications => {
            app.open_pdf();
        }
        _ => {}
    }

    Ok(false)
}
