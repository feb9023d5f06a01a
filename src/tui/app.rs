use super::handlers::{handle_cite_modal, handle_mouse, handle_normal_mode};
use super::ui;
use crate::{
    clipboard::{Clipboard, SystemClipboard},
    config::VitaeConfig,
    error::Result,
    model::{Portfolio, PublicationRecord},
    publications::group_by_category,
    view::{CiteModal, CloseReason, Disclosure},
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect, widgets::ListState};
use std::{io, time::Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    CiteModal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Experience,
    Education,
    Skills,
    Research,
    Publications,
    Media,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Research,
        Section::Publications,
        Section::Media,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Research => "Research",
            Section::Publications => "Publications",
            Section::Media => "Media",
            Section::Contact => "Contact",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub portfolio: Portfolio,
    pub config: VitaeConfig,
    pub section: Section,
    pub section_state: ListState,
    pub input_mode: InputMode,
    pub experience: Disclosure,
    /// Publication indices in display order (grouped by category).
    pub publication_order: Vec<usize>,
    pub selected_publication: usize,
    pub cite: CiteModal,
    pub content_scroll: u16,
    pub show_help: bool,
    pub message: Option<String>,
    /// Area of the cite dialog as last drawn, for mouse hit testing.
    pub modal_area: Option<Rect>,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(portfolio: Portfolio, config: VitaeConfig) -> Self {
        Self::with_clipboard(portfolio, config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(
        portfolio: Portfolio,
        config: VitaeConfig,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let publication_order = group_by_category(&portfolio.publications)
            .iter()
            .flat_map(|g| g.records.iter().map(|(idx, _)| *idx))
            .collect();
        let experience = Disclosure::new(portfolio.experience.len());
        let cite = CiteModal::new(config.tui.copied_feedback());

        let mut section_state = ListState::default();
        section_state.select(Some(0));

        Self {
            portfolio,
            config,
            section: Section::default(),
            section_state,
            input_mode: InputMode::Normal,
            experience,
            publication_order,
            selected_publication: 0,
            cite,
            content_scroll: 0,
            show_help: false,
            message: None,
            modal_area: None,
            clipboard,
        }
    }

    pub fn select_section(&mut self, section: Section) {
        self.section = section;
        self.section_state.select(Some(section.index()));
        self.content_scroll = 0;
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.section.prev());
    }

    pub fn scroll_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }

    pub fn toggle_experience(&mut self) {
        if self.experience.has_toggle() {
            self.experience.toggle();
        }
    }

    pub fn next_publication(&mut self) {
        let count = self.publication_order.len();
        if count > 0 {
            self.selected_publication = (self.selected_publication + 1) % count;
        }
    }

    pub fn previous_publication(&mut self) {
        let count = self.publication_order.len();
        if count > 0 {
            self.selected_publication = if self.selected_publication == 0 {
                count - 1
            } else {
                self.selected_publication - 1
            };
        }
    }

    /// Selected publication with its index in declaration order.
    pub fn selected_publication(&self) -> Option<(usize, &PublicationRecord)> {
        let idx = *self.publication_order.get(self.selected_publication)?;
        self.portfolio.publications.get(idx).map(|r| (idx, r))
    }

    /// The publication shown in the open cite dialog.
    pub fn cited_publication(&self) -> Option<&PublicationRecord> {
        self.cite
            .record()
            .and_then(|idx| self.portfolio.publications.get(idx))
    }

    pub fn open_cite(&mut self) {
        if self.section != Section::Publications {
            return;
        }
        if let Some((idx, _)) = self.selected_publication() {
            self.cite.open(idx);
            self.input_mode = InputMode::CiteModal;
        }
    }

    pub fn close_cite(&mut self, reason: CloseReason) {
        self.cite.close(reason);
        self.modal_area = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn copy_citation(&mut self, now: Instant) {
        let Some(citation) = self.cited_publication().map(|r| r.citation.clone()) else {
            return;
        };
        match self.cite.copy(&citation, self.clipboard.as_mut(), now) {
            Ok(Some(_)) => self.message = Some("Citation copied".to_string()),
            Ok(None) => {}
            Err(e) => self.message = Some(format!("Copy failed: {}", e)),
        }
    }

    /// Open the selected publication's PDF, if it has one.
    pub fn open_pdf(&mut self) {
        let Some((_, record)) = self.selected_publication() else {
            return;
        };
        let Some(link) = record.pdf().map(str::to_string) else {
            self.message = Some("No PDF available".to_string());
            return;
        };
        match open::that(&link) {
            Ok(()) => {
                info!(link = %link, "Opened PDF");
                self.message = Some(format!("Opened {}", link));
            }
            Err(e) => {
                warn!(error = %e, "Failed to open PDF");
                self.message = Some(format!("Failed to open {}: {}", link, e));
            }
        }
    }

    /// Mouse click while the dialog is open: outside closes, inside does not.
    pub fn handle_mouse_click(&mut self, column: u16, row: u16) {
        if !self.cite.is_open() {
            return;
        }
        match self.modal_area {
            Some(area) if super::ui_utils::contains(area, column, row) => self.cite.click_inside(),
            _ => self.close_cite(CloseReason::Backdrop),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.cite.tick(now);
    }
}

pub fn run_tui(portfolio: Portfolio, config: VitaeConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(portfolio, config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let tick = app.config.tui.tick();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // A message lives until the next key press.
                    app.message = None;
                    let quit = match app.input_mode {
                        InputMode::Normal => handle_normal_mode(app, key)?,
                        InputMode::CiteModal => handle_cite_modal(app, key)?,
                    };
                    if quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}
