use crate::render::{HtmlRenderer, write_atomic};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_render(ctx: &CommandContext, out: Option<PathBuf>, stdout: bool) -> Result<()> {
    let page = HtmlRenderer::new(&ctx.portfolio, &ctx.config).render()?;

    if stdout {
        print!("{}", page);
        return Ok(());
    }

    let target = match out {
        Some(path) => path,
        None => ctx.config.output_path(&ctx.root),
    };
    write_atomic(&target, &page)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!(
        "{} {} ({} publications, {} experience entries)",
        "Rendered".green(),
        target.display().to_string().cyan(),
        ctx.portfolio.publications.len(),
        ctx.portfolio.experience.len()
    );
    Ok(())
}
