use super::command_palette::{CommandEntry, CommandGroup, CommandRegistry};
use super::keymap::KeyConfig;
use super::persistence::{self, PersistenceError};
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub keymap: KeyConfig,
    pub theme: PaletteType,
    pub tick_rate_ms: u64,
    pub proximity_refresh_secs: u64,
    pub custom_commands: Vec<CustomCommandConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keymap: KeyConfig::default(),
            theme: PaletteType::default(),
            tick_rate_ms: 250,
            proximity_refresh_secs: 60,
            custom_commands: Vec::new(),
        }
    }
}

/// A user-defined navigation entry for the command palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCommandConfig {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub shortcut: Option<String>,
    #[serde(default)]
    pub group: CommandGroup,
    pub path: String,
}

impl From<CustomCommandConfig> for CommandEntry {
    fn from(c: CustomCommandConfig) -> Self {
        let mut entry = CommandEntry::navigate(c.id, c.group, c.label, c.path);
        entry.description = c.description;
        entry.shortcut = c.shortcut;
        entry
    }
}

impl AppConfig {
    pub fn path() -> Result<PathBuf, PersistenceError> {
        Ok(persistence::config_dir()?.join("config.toml"))
    }

    /// Loads the user config, falling back to defaults on any problem.
    #[must_use]
    pub fn load() -> Self {
        match Self::path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, PersistenceError> {
        let config = persistence::read_toml::<Self>(path)?.unwrap_or_default();
        info!(
            path = %path.display(),
            profile = %config.keymap.profile,
            custom_commands = config.custom_commands.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }

    #[must_use]
    pub fn proximity_refresh(&self) -> Duration {
        Duration::from_secs(self.proximity_refresh_secs.max(1))
    }

    #[must_use]
    pub fn command_registry(&self) -> CommandRegistry {
        CommandRegistry::with_custom(
            self.custom_commands
                .iter()
                .cloned()
                .map(CommandEntry::from)
                .collect(),
        )
    }
}
