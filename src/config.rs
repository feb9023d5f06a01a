use crate::error::{Result, VitaeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".vitae.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitaeConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub tui: TuiSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Author-name token emphasised in publication author lists.
    #[serde(default = "default_self_name")]
    pub self_name: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_favicon_endpoint")]
    pub favicon_endpoint: String,

    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_self_name() -> String {
    "Catapang, J.K.".to_string()
}

fn default_output() -> String {
    "dist/index.html".to_string()
}

fn default_favicon_endpoint() -> String {
    "https://www.google.com/s2/favicons".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            self_name: default_self_name(),
            output: default_output(),
            favicon_endpoint: default_favicon_endpoint(),
            lang: default_lang(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// How long the "Copied!" indicator stays up.
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,

    /// Event poll interval of the terminal viewer.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_copied_feedback_ms() -> u64 {
    1500
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            copied_feedback_ms: default_copied_feedback_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl TuiSettings {
    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardSettings {
    /// Upper bound on how long `vitae cite --copy` keeps serving the copied
    /// text on X11/Wayland. Zero disables the hold.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

fn default_hold_ms() -> u64 {
    30_000
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
        }
    }
}

impl ClipboardSettings {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl VitaeConfig {
    /// Load an explicit config file, or search upward from `start_path`.
    ///
    /// Without any config file the defaults apply; the project root is then
    /// `start_path` itself.
    pub fn load(start_path: &Path, explicit: Option<&Path>) -> Result<(Self, PathBuf)> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(VitaeError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        let Some(config_path) = config_path else {
            debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            return Ok((Self::default(), start_path.to_path_buf()));
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config: VitaeConfig = toml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start_path.to_path_buf());
        debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.site.favicon_endpoint).map_err(|e| {
            VitaeError::Config(format!(
                "Invalid favicon_endpoint '{}': {}",
                self.site.favicon_endpoint, e
            ))
        })?;
        if self.site.output.trim().is_empty() {
            return Err(VitaeError::Config("site.output must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.site.output)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
