use crate::model::Category;
use crate::publications::group_by_category;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_category, highlight_name, publication_json};

pub fn handle_publications(
    ctx: &CommandContext,
    category: Option<Category>,
    json: bool,
) -> Result<()> {
    let groups: Vec<_> = group_by_category(&ctx.portfolio.publications)
        .into_iter()
        .filter(|g| category.is_none_or(|c| g.category == c))
        .collect();

    if json {
        let records: Vec<_> = groups
            .iter()
            .flat_map(|g| g.records.iter())
            .map(|(idx, record)| publication_json(*idx, record))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let self_name = &ctx.config.site.self_name;
    for group in &groups {
        println!("{}", format_category(group.category));
        if group.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for (idx, record) in &group.records {
            println!("  {} {}", format!("[{}]", idx + 1).cyan(), record.title.bold());
            println!("      {}", highlight_name(&record.authors, self_name));
            let when = match &record.venue {
                Some(venue) => format!("{} · {}", venue, record.month_year),
                None => record.month_year.clone(),
            };
            println!("      {}", when.dimmed());
            if let Some(pdf) = record.pdf() {
                println!("      {}", pdf.blue().underline());
            }
        }
        println!();
    }
    Ok(())
}
