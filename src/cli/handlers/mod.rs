mod cite;
mod init;
mod publications;
mod render;
mod tui;
mod utils;

pub use cite::handle_cite;
pub use init::handle_init;
pub use publications::handle_publications;
pub use render::handle_render;
pub use tui::handle_tui;

use crate::config::VitaeConfig;
use crate::error::Result;
use crate::model::Portfolio;
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: VitaeConfig,
    pub root: PathBuf,
    pub portfolio: Portfolio,
}

impl CommandContext {
    /// Load the config (explicit or found upward from `start`) and the embedded content.
    pub fn load(start: &Path, explicit: Option<&Path>) -> Result<Self> {
        let (config, root) = VitaeConfig::load(start, explicit)?;
        let portfolio = crate::content::load()?;
        Ok(Self {
            config,
            root,
            portfolio,
        })
    }
}
