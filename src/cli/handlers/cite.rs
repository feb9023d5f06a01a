use crate::clipboard::{Clipboard, SELECTION_NEEDS_OWNER, SystemClipboard};
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::publication_json;

pub fn handle_cite(ctx: &CommandContext, number: usize, copy: bool, json: bool) -> Result<()> {
    let record = ctx.portfolio.publication(number)?;
    let citation = record.plain_citation();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&publication_json(number - 1, record))?
        );
    } else {
        println!("{}", citation);
    }

    if copy {
        // This process owns the selection on X11/Wayland; keep it alive
        // until the text is taken over or the hold runs out.
        let mut clipboard = SystemClipboard::holding(ctx.config.clipboard.hold());
        if let Some(hold) = clipboard.hold().filter(|_| SELECTION_NEEDS_OWNER) {
            eprintln!(
                "{}",
                format!(
                    "Serving the citation for up to {}s; paste it now or let a clipboard manager take it",
                    hold.as_secs()
                )
                .dimmed()
            );
        }
        clipboard
            .set_text(&citation)
            .context("Failed to copy citation")?;
        eprintln!("{}", "Copied!".green());
    }
    Ok(())
}
