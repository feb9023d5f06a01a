//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here so the views stay consistent.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Category;
use crate::view::CopyFeedback;

#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub selection_indicator: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub heading: Color,
    pub link: Color,

    // Publications
    pub self_name: Color,
    pub category_pending: Color,
    pub category_journal: Color,
    pub category_conference: Color,
    pub action: Color,
    pub action_disabled: Color,

    // Modal
    pub modal_border: Color,
    pub copied: Color,
    pub copy_failed: Color,

    // Footer/Mode colors (bg, fg)
    pub mode_normal: (Color, Color),
    pub mode_cite: (Color, Color),

    pub message: Color,
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),
            selection_indicator: Color::Rgb(166, 226, 46),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),
            heading: Color::Rgb(102, 217, 239),
            link: Color::Rgb(102, 217, 239),

            self_name: Color::Rgb(230, 219, 116),
            category_pending: Color::Rgb(174, 129, 255),
            category_journal: Color::Rgb(166, 226, 46),
            category_conference: Color::Rgb(253, 151, 31),
            action: Color::Rgb(102, 217, 239),
            action_disabled: Color::Rgb(88, 85, 70),

            modal_border: Color::Rgb(230, 219, 116),
            copied: Color::Rgb(166, 226, 46),
            copy_failed: Color::Rgb(249, 38, 114),

            mode_normal: (Color::Rgb(102, 217, 239), Color::Rgb(39, 40, 34)),
            mode_cite: (Color::Rgb(230, 219, 116), Color::Rgb(39, 40, 34)),

            message: Color::Rgb(166, 226, 46),
            help_key: Color::Rgb(102, 217, 239),
            help_border: Color::Rgb(230, 219, 116),
        }
    }
}

impl Theme {
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Pending => self.category_pending,
            Category::Journal => self.category_journal,
            Category::Conference => self.category_conference,
        }
    }

    pub fn feedback_color(&self, feedback: &CopyFeedback) -> Color {
        match feedback {
            CopyFeedback::Idle => self.action,
            CopyFeedback::Copied { .. } => self.copied,
            CopyFeedback::Failed { .. } => self.copy_failed,
        }
    }

    /// Style for an action hint such as `[Cite]`; disabled actions are dimmed.
    pub fn action_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.action)
        } else {
            Style::default()
                .fg(self.action_disabled)
                .add_modifier(Modifier::CROSSED_OUT)
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
