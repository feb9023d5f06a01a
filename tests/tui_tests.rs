use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use vitae::{
    clipboard::Clipboard,
    config::VitaeConfig,
    content,
    error::{Result, VitaeError},
    model::Portfolio,
    tui::app::{App, InputMode, Section},
    view::{CloseReason, CopyFeedback},
};

/// Clipboard that records writes, or fails every write.
#[derive(Clone, Default)]
struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(VitaeError::Clipboard("no display".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn create_test_app_with(portfolio: Portfolio, clipboard: RecordingClipboard) -> App {
    App::with_clipboard(portfolio, VitaeConfig::default(), Box::new(clipboard))
}

/// Helper to create a test app over the embedded content
fn create_test_app() -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let app = create_test_app_with(content::load().unwrap(), clipboard.clone());
    (app, clipboard)
}

// ============================================================================
// Sections
// ============================================================================

#[test]
fn test_section_navigation_wraps() {
    let (mut app, _) = create_test_app();
    assert_eq!(app.section, Section::About);

    app.prev_section();
    assert_eq!(app.section, Section::Contact);
    assert_eq!(app.section_state.selected(), Some(Section::ALL.len() - 1));

    app.next_section();
    app.next_section();
    assert_eq!(app.section, Section::Experience);
    assert_eq!(app.section_state.selected(), Some(1));
}

#[test]
fn test_section_change_resets_scroll() {
    let (mut app, _) = create_test_app();
    app.scroll_down();
    app.scroll_down();
    assert_eq!(app.content_scroll, 2);

    app.select_section(Section::Media);
    assert_eq!(app.content_scroll, 0);
}

// ============================================================================
// Experience disclosure
// ============================================================================

#[test]
fn test_experience_toggle_cycle() {
    let (mut app, _) = create_test_app();
    let entries = app.portfolio.experience.clone();
    assert_eq!(entries.len(), 9);

    assert_eq!(app.experience.visible(&entries).len(), 1);
    assert_eq!(app.experience.label(), "Show 8 more");

    app.toggle_experience();
    assert_eq!(app.experience.visible(&entries).len(), 9);
    assert_eq!(app.experience.label(), "Show less");

    app.toggle_experience();
    assert_eq!(app.experience.visible(&entries).len(), 1);
    assert_eq!(app.experience.visible(&entries)[0], entries[0]);
}

#[test]
fn test_single_entry_has_no_toggle() {
    let mut portfolio = content::load().unwrap();
    portfolio.experience.truncate(1);
    let mut app = create_test_app_with(portfolio, RecordingClipboard::default());

    assert!(!app.experience.has_toggle());
    app.toggle_experience();
    assert!(!app.experience.is_expanded());
}

// ============================================================================
// Cite modal
// ============================================================================

#[test]
fn test_cite_only_opens_in_publications() {
    let (mut app, _) = create_test_app();

    app.open_cite();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.cite.is_open());

    app.select_section(Section::Publications);
    app.open_cite();
    assert_eq!(app.input_mode, InputMode::CiteModal);
    assert_eq!(app.cite.record(), Some(0));
}

#[test]
fn test_copy_writes_plain_text_and_reverts() {
    let (mut app, clipboard) = create_test_app();
    app.select_section(Section::Publications);
    app.next_publication();
    app.open_cite();
    assert_eq!(app.cite.record(), Some(1));

    let now = Instant::now();
    app.copy_citation(now);

    let writes = clipboard.writes.borrow();
    assert_eq!(writes.len(), 1);
    assert!(writes[0].starts_with("Catapang, J.K., Borlongan, A.M., & Go, M.A.C. (2025)."));
    assert!(!writes[0].contains('<'));
    drop(writes);

    assert_eq!(app.cite.button_label(), "Copied!");
    assert_eq!(app.message.as_deref(), Some("Citation copied"));
    app.tick(now + Duration::from_millis(1499));
    assert_eq!(app.cite.button_label(), "Copied!");
    app.tick(now + Duration::from_millis(1500));
    assert_eq!(app.cite.button_label(), "Copy");
}

#[test]
fn test_copy_failure_is_visible() {
    let clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let mut app = create_test_app_with(content::load().unwrap(), clipboard);
    app.select_section(Section::Publications);
    app.open_cite();

    app.copy_citation(Instant::now());
    assert_eq!(app.cite.button_label(), "Copy failed");
    assert!(matches!(app.cite.feedback(), CopyFeedback::Failed { .. }));
    assert!(app.cite.is_open());
    let message = app.message.as_deref().unwrap();
    assert!(message.starts_with("Copy failed"), "{}", message);
    assert!(message.contains("no display"), "{}", message);
}

#[test]
fn test_close_discards_feedback() {
    let (mut app, _) = create_test_app();
    app.select_section(Section::Publications);
    app.open_cite();
    app.copy_citation(Instant::now());
    assert_eq!(app.cite.button_label(), "Copied!");

    app.close_cite(CloseReason::Escape);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.cite.is_open());
    assert_eq!(app.cite.feedback(), &CopyFeedback::Idle);

    // Reopening starts from a clean button
    app.open_cite();
    assert_eq!(app.cite.button_label(), "Copy");
}

#[test]
fn test_mouse_click_inside_keeps_modal_open() {
    let (mut app, _) = create_test_app();
    app.select_section(Section::Publications);
    app.open_cite();
    app.modal_area = Some(Rect::new(10, 5, 40, 10));

    app.handle_mouse_click(20, 8);
    assert!(app.cite.is_open());
    assert_eq!(app.input_mode, InputMode::CiteModal);

    app.handle_mouse_click(2, 2);
    assert!(!app.cite.is_open());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.modal_area, None);
}

// ============================================================================
// Publications
// ============================================================================

#[test]
fn test_publication_selection_wraps() {
    let (mut app, _) = create_test_app();
    let count = app.publication_order.len();
    assert_eq!(count, 8);

    app.previous_publication();
    assert_eq!(app.selected_publication, count - 1);
    app.next_publication();
    assert_eq!(app.selected_publication, 0);
}

#[test]
fn test_selection_follows_grouped_order() {
    let mut portfolio = content::load().unwrap();
    // Move the last conference paper into the pending group
    let last = portfolio.publications.len() - 1;
    portfolio.publications[last].category = vitae::model::Category::Pending;
    let app = create_test_app_with(portfolio, RecordingClipboard::default());

    assert_eq!(app.publication_order[0], last);
    let (idx, record) = app.selected_publication().unwrap();
    assert_eq!(idx, last);
    assert_eq!(record.category, vitae::model::Category::Pending);
}

#[test]
fn test_missing_pdf_reports_and_cite_still_works() {
    let (mut app, _) = create_test_app();
    app.select_section(Section::Publications);
    assert!(app.selected_publication().unwrap().1.pdf().is_none());

    app.open_pdf();
    assert_eq!(app.message.as_deref(), Some("No PDF available"));

    app.open_cite();
    assert!(app.cite.is_open());
}
