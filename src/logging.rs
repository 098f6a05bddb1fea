use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Installs a file-backed tracing subscriber. The terminal belongs to the
/// dashboard, so nothing is ever logged to stdout or stderr.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let path = config
        .log_path()
        .ok_or_else(|| eyre!("no cache directory available for the log file"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env = std::env::var("RUST_LOG").ok();
    let filter = build_filter(&config.level, env.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;

    Ok(path)
}

fn build_filter(level: &str, env: Option<&str>) -> Result<EnvFilter> {
    let directive = env.filter(|s| !s.trim().is_empty()).unwrap_or(level);
    EnvFilter::try_new(directive).map_err(|e| eyre!("invalid log filter `{directive}`: {e}"))
}
