//! Output renderers.
//!
//! - [`html`]: the static page
//! - [`write_atomic`]: crash-safe file output

pub mod html;

pub use html::{HtmlRenderer, SECTION_IDS};

use crate::error::{Result, VitaeError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Write `content` to `target` through a temp file in the same directory.
///
/// Readers never observe a partially written page.
pub fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let target_dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(target_dir)?;

    let mut temp_file = NamedTempFile::new_in(target_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file
        .persist(target)
        .map_err(|e| VitaeError::Io(e.error))?;

    info!(path = %target.display(), bytes = content.len(), "Wrote page");
    Ok(())
}
