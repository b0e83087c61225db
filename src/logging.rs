use crate::app::persistence::PersistenceError;
use std::env;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "dmforge.log";

/// `~/.local/state/dmforge`. The terminal belongs to the UI, so logs go here.
pub fn log_dir() -> Result<PathBuf, PersistenceError> {
    let home = home::home_dir().ok_or(PersistenceError::NoHomeDir)?;
    Ok(home.join(".local").join("state").join("dmforge"))
}

fn env_filter() -> EnvFilter {
    let debug_enabled = env::var("DMFORGE_DEBUG_LOG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DMFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install a daily-rolling file subscriber. Keep the guard alive until exit
/// or buffered lines are lost. Returns `None` when there is nowhere to log.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_under_local_state() {
        if let Ok(dir) = log_dir() {
            assert!(dir.ends_with(".local/state/dmforge"));
        }
    }
}
