use crate::model::Category;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(
    author,
    version,
    about = "Render and browse an academic portfolio: publications, citations and experience"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .vitae.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "VITAE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .vitae.toml into the current directory
    Init,

    /// Render the portfolio as a single self-contained HTML page
    #[command(visible_alias = "build")]
    Render {
        /// Output file (defaults to site.output from the config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the page to stdout instead of writing a file
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },

    /// Browse the portfolio in the terminal
    Tui,

    /// List publications grouped by category
    #[command(visible_alias = "pubs")]
    Publications {
        /// Only show one category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the plain-text citation of a publication
    Cite {
        /// Publication number (1-based, as listed by `vitae publications`)
        number: usize,

        /// Also copy the citation to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Pending,
    Journal,
    Conference,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Pending => Category::Pending,
            CategoryArg::Journal => Category::Journal,
            CategoryArg::Conference => Category::Conference,
        }
    }
}
