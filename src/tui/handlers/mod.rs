mod cite_modal;
mod mouse;
mod normal_mode;

pub use cite_modal::handle_cite_modal;
pub use mouse::handle_mouse;
pub use normal_mode::handle_normal_mode;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Clipboard;
    use crate::config::VitaeConfig;
    use crate::tui::app::{App, InputMode, Section};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn set_text(&mut self, _text: &str) -> crate::error::Result<()> {
            Ok(())
        }
    }

    fn test_app() -> App {
        App::with_clipboard(
            crate::content::load().unwrap(),
            VitaeConfig::default(),
            Box::new(NullClipboard),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_only_in_normal_mode() {
        let mut app = test_app();
        assert!(handle_normal_mode(&mut app, key(KeyCode::Char('q'))).unwrap());

        app.select_section(Section::Publications);
        app.open_cite();
        // q closes the dialog instead of quitting
        assert!(!handle_cite_modal(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_number_keys_jump_to_section() {
        let mut app = test_app();
        handle_normal_mode(&mut app, key(KeyCode::Char('6'))).unwrap();
        assert_eq!(app.section, Section::Publications);
        handle_normal_mode(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.section, Section::Experience);
    }

    #[test]
    fn test_enter_depends_on_section() {
        let mut app = test_app();
        app.select_section(Section::Experience);
        handle_normal_mode(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.experience.is_expanded());
        assert!(!app.cite.is_open());

        app.select_section(Section::Publications);
        handle_normal_mode(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.cite.is_open());
        assert_eq!(app.input_mode, InputMode::CiteModal);
    }

    #[test]
    fn test_cite_keys() {
        let mut app = test_app();
        app.select_section(Section::Publications);
        handle_normal_mode(&mut app, key(KeyCode::Char('c'))).unwrap();

        handle_cite_modal(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.cite.button_label(), "Copied!");

        handle_cite_modal(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.cite.is_open());
        assert_eq!(app.cite.button_label(), "Copy");
    }

    #[test]
    fn test_m_ignored_outside_experience() {
        let mut app = test_app();
        handle_normal_mode(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert!(!app.experience.is_expanded());
    }
}
