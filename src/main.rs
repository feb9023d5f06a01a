use anyhow::{Context, Result};
use clap::Parser;

use vitae::cli::handlers::{
    CommandContext, handle_cite, handle_init, handle_publications, handle_render, handle_tui,
};
use vitae::cli::{Cli, Commands};
use vitae::logging::{self, LogOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogOptions {
        verbose: cli.verbose,
        file: cli.log_file.clone(),
        quiet_stderr: matches!(cli.command, Commands::Tui),
    });

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    let load = || {
        CommandContext::load(&cwd, cli.config.as_deref())
            .context("Failed to load configuration or content")
    };

    match cli.command {
        Commands::Init => handle_init(&cwd),
        Commands::Render { out, stdout } => handle_render(&load()?, out, stdout),
        Commands::Tui => handle_tui(load()?),
        Commands::Publications { category, json } => {
            handle_publications(&load()?, category.map(Into::into), json)
        }
        Commands::Cite { number, copy, json } => handle_cite(&load()?, number, copy, json),
    }
}
