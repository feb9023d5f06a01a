//! Content tables compiled into the binary.
//!
//! The portfolio is authored as TOML and embedded at build time. It is parsed
//! once per process; every rich-text field becomes a [`crate::markup::Markup`]
//! tree during deserialization.

use crate::error::{Result, VitaeError};
use crate::model::Portfolio;
use tracing::debug;

const PORTFOLIO_TOML: &str = include_str!("../content/portfolio.toml");

/// Load the embedded portfolio.
pub fn load() -> Result<Portfolio> {
    let portfolio = parse(PORTFOLIO_TOML)?;
    debug!(
        experience = portfolio.experience.len(),
        publications = portfolio.publications.len(),
        media = portfolio.media.len(),
        "Loaded portfolio content"
    );
    Ok(portfolio)
}

pub fn parse(source: &str) -> Result<Portfolio> {
    toml::from_str(source).map_err(|e| VitaeError::Content(e.to_string()))
}
