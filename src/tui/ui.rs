use super::app::{App, InputMode, Section};
use super::theme::theme;
use super::ui_modals::draw_cite_modal;
use super::ui_utils::{self, markup_spans};
use crate::model::ExperienceEntry;
use crate::publications::{emphasize_name, group_by_category};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name + headline
            Constraint::Min(0),    // Sidebar + content
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(chunks[1]);
    draw_sidebar(f, app, body[0]);
    draw_content(f, app, body[1]);
    draw_footer(f, app, chunks[2]);

    if app.show_help {
        draw_help_popup(f);
    }

    if app.input_mode == InputMode::CiteModal {
        draw_cite_modal(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let profile = &app.portfolio.profile;
    let lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(t.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", profile.headline, profile.tagline),
            Style::default().fg(t.text_muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if *section == app.section {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.text_muted)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(t.help_key)),
                Span::styled(section.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(false)),
        )
        .highlight_symbol("▸")
        .highlight_style(Style::default().fg(t.selection_indicator));

    f.render_stateful_widget(list, area, &mut app.section_state);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let (lines, focus_line) = section_lines(app);

    // Inside the borders
    let width = area.width.saturating_sub(2);
    let scroll = match focus_line {
        Some(line) => focus_scroll(&lines, line, width),
        None => app.content_scroll,
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", app.section.label()))
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(true)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// Scroll offset that puts `focus` two wrapped rows below the top.
fn focus_scroll(lines: &[Line<'static>], focus: usize, width: u16) -> u16 {
    let above = Paragraph::new(lines[..focus.min(lines.len())].to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(above.saturating_sub(2)).unwrap_or(u16::MAX)
}

/// Lines for the current section, plus the line to keep in view, if any.
fn section_lines(app: &App) -> (Vec<Line<'static>>, Option<usize>) {
    let t = theme();
    let p = &app.portfolio;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus = None;

    match app.section {
        Section::About => {
            for paragraph in &p.profile.about {
                lines.push(Line::from(markup_spans(paragraph, Style::default())));
                lines.push(Line::default());
            }
        }
        Section::Experience => {
            for entry in app.experience.visible(&p.experience) {
                entry_lines(entry, &mut lines);
            }
            if app.experience.has_toggle() {
                lines.push(Line::from(vec![
                    Span::styled("[m] ", Style::default().fg(t.help_key)),
                    Span::styled(app.experience.label(), t.action_style(true)),
                ]));
            }
        }
        Section::Education => {
            for entry in &p.education {
                entry_lines(entry, &mut lines);
            }
            if let Some(note) = &p.education_note {
                lines.push(Line::from(markup_spans(
                    note,
                    Style::default().fg(t.text_muted),
                )));
            }
        }
        Section::Skills => {
            for group in &p.skills {
                lines.push(Line::from(Span::styled(group.title.clone(), t.heading_style())));
                lines.push(Line::from(group.text.clone()));
                lines.push(Line::default());
            }
            if !p.certificates.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Certificates & Qualifications",
                    t.heading_style(),
                )));
                for item in &p.certificates {
                    lines.push(Line::from(markup_spans(item, Style::default())));
                }
            }
        }
        Section::Research => {
            for entry in &p.research {
                entry_lines(entry, &mut lines);
            }
            for grant in &p.grants {
                lines.push(Line::from(Span::styled(grant.title.clone(), t.heading_style())));
                lines.push(Line::from(markup_spans(&grant.body, Style::default())));
                lines.push(Line::default());
            }
            if !p.services.is_empty() {
                lines.push(Line::from(Span::styled("Professional Services", t.heading_style())));
                for item in &p.services {
                    lines.push(Line::from(markup_spans(item, Style::default())));
                }
            }
        }
        Section::Publications => {
            let selected = app.selected_publication().map(|(idx, _)| idx);
            for group in group_by_category(&p.publications) {
                lines.push(Line::from(Span::styled(
                    group.label(),
                    Style::default()
                        .fg(t.category_color(group.category))
                        .add_modifier(Modifier::BOLD),
                )));
                for (idx, record) in &group.records {
                    let is_selected = selected == Some(*idx);
                    if is_selected {
                        focus = Some(lines.len());
                    }
                    let marker = if is_selected {
                        Span::styled("▸ ", Style::default().fg(t.selection_indicator))
                    } else {
                        Span::raw("  ")
                    };
                    lines.push(Line::from(vec![
                        marker,
                        Span::styled(
                            record.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]));

                    let authors = emphasize_name(&record.authors, &app.config.site.self_name);
                    let mut author_line = vec![Span::raw("  ")];
                    author_line.extend(markup_spans(&authors, Style::default()).into_iter().map(
                        |span| {
                            if span.style.add_modifier.contains(Modifier::BOLD) {
                                span.style(Style::default().fg(t.self_name).add_modifier(Modifier::BOLD))
                            } else {
                                span
                            }
                        },
                    ));
                    lines.push(Line::from(author_line));

                    let venue = match &record.venue {
                        Some(v) => format!("  {} · {}", v, record.month_year),
                        None => format!("  {}", record.month_year),
                    };
                    lines.push(Line::from(Span::styled(venue, Style::default().fg(t.text_muted))));

                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled("[o] View PDF", t.action_style(record.pdf().is_some())),
                        Span::raw("  "),
                        Span::styled("[c] Cite", t.action_style(true)),
                    ]));
                    lines.push(Line::default());
                }
            }
            if !p.presentations.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Conference Presentations & Lectures",
                    t.heading_style(),
                )));
                for item in &p.presentations {
                    let mut spans = vec![Span::raw("• ")];
                    spans.extend(markup_spans(item, Style::default()));
                    lines.push(Line::from(spans));
                }
            }
        }
        Section::Media => {
            for item in &p.media {
                lines.push(Line::from(vec![
                    Span::styled(item.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(
                        item.outlet.clone(),
                        Style::default().add_modifier(Modifier::ITALIC),
                    ),
                    Span::styled(format!(", {}", item.date), Style::default().fg(t.text_muted)),
                ]));
                lines.push(Line::from(Span::styled(item.url.clone(), Style::default().fg(t.link))));
                if let Some(credit) = &item.credit {
                    lines.push(Line::from(Span::styled(
                        credit.clone(),
                        Style::default().fg(t.text_muted),
                    )));
                }
                lines.push(Line::default());
            }
            if let Some(affiliations) = &p.affiliations {
                lines.push(Line::from(markup_spans(affiliations, Style::default())));
            }
        }
        Section::Contact => {
            let contact = &p.profile.contact;
            lines.push(Line::from(vec![
                Span::styled("Email  ", Style::default().fg(t.text_muted)),
                Span::styled(contact.email.clone(), Style::default().fg(t.link)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Phone  ", Style::default().fg(t.text_muted)),
                Span::raw(contact.phone.clone()),
            ]));
            for link in &contact.links {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}  ", link.label()), Style::default().fg(t.text_muted)),
                    Span::styled(link.url.clone(), Style::default().fg(t.link)),
                ]));
            }
            if let Some(address) = &contact.address {
                lines.push(Line::default());
                lines.push(Line::from(address.clone()));
            }
        }
    }

    (lines, focus)
}

fn entry_lines(entry: &ExperienceEntry, lines: &mut Vec<Line<'static>>) {
    let t = theme();
    lines.push(Line::from(vec![
        Span::styled(entry.role.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(entry.company.clone()),
        Span::raw("  "),
        Span::styled(entry.date_range.clone(), Style::default().fg(t.text_muted)),
    ]));
    if let Some(location) = &entry.location {
        lines.push(Line::from(Span::styled(
            location.clone(),
            Style::default().fg(t.text_muted),
        )));
    }
    if let Some(description) = &entry.description {
        lines.push(Line::from(description.clone()));
    }
    for bullet in &entry.bullets {
        let mut spans = vec![Span::raw("• ")];
        spans.extend(markup_spans(bullet, Style::default()));
        lines.push(Line::from(spans));
    }
    if let Some(meta) = &entry.meta {
        lines.push(Line::from(Span::styled(
            meta.clone(),
            Style::default().fg(t.text_muted).add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::default());
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let (label, (bg, fg)) = match app.input_mode {
        InputMode::Normal => (" NORMAL ", t.mode_normal),
        InputMode::CiteModal => (" CITE ", t.mode_cite),
    };

    let mut spans = vec![
        Span::styled(label, Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ];

    if let Some(message) = &app.message {
        spans.push(Span::styled(message.clone(), Style::default().fg(t.message)));
    } else {
        let hints: &[(&str, &str)] = match (app.input_mode, app.section) {
            (InputMode::CiteModal, _) => &[("y", "copy"), ("Esc", "close")],
            (InputMode::Normal, Section::Publications) => &[
                ("↑↓", "select"),
                ("c", "cite"),
                ("o", "pdf"),
                ("Tab", "section"),
                ("?", "help"),
                ("q", "quit"),
            ],
            (InputMode::Normal, Section::Experience) => &[
                ("m", "more/less"),
                ("↑↓", "scroll"),
                ("Tab", "section"),
                ("?", "help"),
                ("q", "quit"),
            ],
            (InputMode::Normal, _) => &[
                ("↑↓", "scroll"),
                ("Tab", "section"),
                ("?", "help"),
                ("q", "quit"),
            ],
        };
        for (key, action) in hints {
            spans.push(Span::styled(*key, Style::default().fg(t.help_key)));
            spans.push(Span::styled(
                format!(" {}  ", action),
                Style::default().fg(t.text_muted),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame) {
    let t = theme();
    let area = ui_utils::centered_rect(50, 60, f.area());

    let keys = [
        ("Tab / →", "Next section"),
        ("S-Tab / ←", "Previous section"),
        ("1-8", "Jump to section"),
        ("↑ / ↓", "Scroll or select publication"),
        ("PgUp / PgDn", "Scroll faster"),
        ("m", "Show more/less experience"),
        ("c / Enter", "Cite selected publication"),
        ("o", "Open PDF"),
        ("y", "Copy citation (in dialog)"),
        ("Esc", "Close dialog or help"),
        ("q", "Quit"),
    ];
    let lines: Vec<Line> = keys
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Style::default().fg(t.help_key)),
                Span::raw(*desc),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(t.help_border)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
