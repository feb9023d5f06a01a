use crate::markup::{Inline, Markup};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
};

use super::theme::theme;

/// Convert a markup tree to styled spans on top of `base`.
pub fn markup_spans(markup: &Markup, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    push_spans(markup.nodes(), base, &mut spans);
    spans
}

fn push_spans(nodes: &[Inline], style: Style, out: &mut Vec<Span<'static>>) {
    for node in nodes {
        match node {
            Inline::Text(t) => out.push(Span::styled(t.clone(), style)),
            Inline::Strong(children) => {
                push_spans(children, style.add_modifier(Modifier::BOLD), out)
            }
            Inline::Emphasis(children) => {
                push_spans(children, style.add_modifier(Modifier::ITALIC), out)
            }
            Inline::Link { children, .. } => push_spans(
                children,
                style
                    .fg(theme().link)
                    .add_modifier(Modifier::UNDERLINED),
                out,
            ),
        }
    }
}

/// Calculate a centered rectangle within a parent rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
