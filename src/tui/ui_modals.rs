use super::app::App;
use super::theme::theme;
use super::ui_utils::{centered_rect, markup_spans};
use crate::view::CopyFeedback;

use ratatui::{
    Frame,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draw the citation dialog and remember its area for click hit testing.
pub fn draw_cite_modal(f: &mut Frame, app: &mut App) {
    let t = theme();
    let area = centered_rect(70, 45, f.area());
    app.modal_area = Some(area);

    let Some(record) = app.cited_publication() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            record.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(markup_spans(&record.citation, Style::default().fg(t.text))),
        Line::default(),
    ];

    let feedback = app.cite.feedback();
    lines.push(Line::from(vec![
        Span::styled("[y] ", Style::default().fg(t.help_key)),
        Span::styled(
            app.cite.button_label(),
            Style::default()
                .fg(t.feedback_color(feedback))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[Esc] ", Style::default().fg(t.help_key)),
        Span::styled("Close", Style::default().fg(t.text_muted)),
    ]));

    if let CopyFeedback::Failed { message, .. } = feedback {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(t.copy_failed),
        )));
    }

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Cite this work (APA) ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
