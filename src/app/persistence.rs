use crate::domain::mode::DashboardMode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to encode TOML: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// `~/.config/dmforge`
pub fn config_dir() -> Result<PathBuf, PersistenceError> {
    home::home_dir()
        .map(|mut path| {
            path.push(".config");
            path.push("dmforge");
            path
        })
        .ok_or(PersistenceError::NoHomeDir)
}

pub fn preferences_path() -> Result<PathBuf, PersistenceError> {
    Ok(config_dir()?.join("preferences.toml"))
}

/// Reads and decodes `path`. A missing file is `Ok(None)`.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|source| PersistenceError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

pub fn write_toml<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = toml::to_string(value)?;
    std::fs::write(path, content).map_err(io_err)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    // Kept as text so an unknown mode degrades instead of failing the file
    mode: Option<String>,
}

/// Stored dashboard mode, or `Studio` when the file is missing, unreadable
/// or names a mode we don't know.
pub fn load_dashboard_mode(path: &Path) -> DashboardMode {
    let prefs = match read_toml::<Preferences>(path) {
        Ok(prefs) => prefs.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable preferences");
            return DashboardMode::default();
        }
    };

    match prefs.mode.as_deref().map(str::parse::<DashboardMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            warn!(error = %e, "Falling back to default dashboard mode");
            DashboardMode::default()
        }
        None => DashboardMode::default(),
    }
}

pub fn save_dashboard_mode(path: &Path, mode: DashboardMode) -> Result<(), PersistenceError> {
    let prefs = Preferences {
        mode: Some(mode.key().to_string()),
    };
    write_toml(path, &prefs)?;
    debug!(%mode, path = %path.display(), "Saved dashboard mode");
    Ok(())
}
