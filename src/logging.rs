use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Error, Result};

pub const LOG_ENV_VAR: &str = "PROJBOARD_LOG";

/// Sends tracing output to the configured log file. The terminal belongs to
/// the UI, so nothing is written to stdout or stderr.
///
/// Filter precedence: `PROJBOARD_LOG`, then `log_level` from config.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
