use crate::markup::Inline;
use crate::model::{Category, PublicationRecord};
use crate::publications::emphasize_name;
use colored::Colorize;
use serde_json::{Value, json};

/// Format a category heading with color coding
pub fn format_category(category: Category) -> colored::ColoredString {
    match category {
        Category::Pending => category.label().magenta().bold(),
        Category::Journal => category.label().green().bold(),
        Category::Conference => category.label().yellow().bold(),
    }
}

/// Author list with the self-name token highlighted
pub fn highlight_name(authors: &str, name: &str) -> String {
    emphasize_name(authors, name)
        .nodes()
        .iter()
        .map(|node| match node {
            Inline::Strong(_) => name.bold().to_string(),
            other => inline_text(other),
        })
        .collect()
}

fn inline_text(node: &Inline) -> String {
    match node {
        Inline::Text(t) => t.clone(),
        Inline::Strong(children) | Inline::Emphasis(children) | Inline::Link { children, .. } => {
            children.iter().map(inline_text).collect()
        }
    }
}

/// JSON view of a publication; `number` is 1-based like the CLI argument.
pub fn publication_json(idx: usize, record: &PublicationRecord) -> Value {
    json!({
        "number": idx + 1,
        "category": record.category,
        "title": record.title,
        "authors": record.authors,
        "month_year": record.month_year,
        "venue": record.venue,
        "pdf_link": record.pdf(),
        "citation": record.plain_citation(),
    })
}
