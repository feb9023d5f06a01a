use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Enable DEBUG level for this crate.
    pub verbose: bool,
    /// Daily-rolling JSON log file.
    pub file: Option<PathBuf>,
    /// Keep stderr quiet. The terminal viewer owns the screen, so it only
    /// logs to the file, if any.
    pub quiet_stderr: bool,
}

impl LogOptions {
    fn filter(&self) -> EnvFilter {
        let default_level = if self.verbose { "debug" } else { "info" };
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("vitae={}", default_level)))
    }
}

/// Initialize the global subscriber. `RUST_LOG` overrides the level.
pub fn init(options: &LogOptions) {
    let stderr_layer = (!options.quiet_stderr).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = options.file.as_deref().map(|path| {
        let (dir, name) = split_log_path(path);
        let _ = std::fs::create_dir_all(&dir);
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, name))
            .with_ansi(false)
            .json()
            .boxed()
    });

    // try_init: a second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(options.filter())
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("vitae.log"));
    (dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("logs/vitae.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(name, PathBuf::from("vitae.log"));

        let (dir, name) = split_log_path(Path::new("bare.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, PathBuf::from("bare.log"));
    }

    #[test]
    fn test_init_creates_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("vitae.log");
        init(&LogOptions {
            verbose: true,
            file: Some(log_path.clone()),
            quiet_stderr: true,
        });
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(&LogOptions::default());
        init(&LogOptions::default());
    }
}
