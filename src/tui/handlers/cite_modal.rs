use crate::tui::app::App;
use crate::view::CloseReason;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;
use std::time::Instant;

/// Handle key events while the cite dialog is open
pub fn handle_cite_modal(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Esc => app.close_cite(CloseReason::Escape),
        KeyCode::Char('q') | KeyCode::Char('x') => app.close_cite(CloseReason::CloseButton),
        KeyCode::Char('y') | KeyCode::Enter => app.copy_citation(Instant::now()),
        _ => {}
    }

    Ok(false)
}
