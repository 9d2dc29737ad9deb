use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
pub enum LogTarget {
    /// Append to the log file; the terminal belongs to the UI.
    File,
    /// Write to stderr (non-interactive subcommands).
    Stderr,
}

/// Path of the TUI log file.
pub fn log_path() -> PathBuf {
    directories::ProjectDirs::from("com", "mrmattias", "wallbrowse")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
        .join("wallbrowse.log")
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default level.
pub fn init(target: LogTarget) {
    match target {
        LogTarget::File => {
            let path = log_path();
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            // No log file means no logging; stderr would draw over the UI.
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter("info"))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init();
            }
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .compact()
                .try_init();
        }
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
