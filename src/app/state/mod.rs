use super::command_palette::CommandRegistry;
use super::config::AppConfig;
use super::keymap::KeyMap;
use crate::domain::{mode::DashboardMode, models::DashboardData, route::Route};
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;
use std::time::Instant;

pub mod checklist;
pub mod command_palette;
pub mod error;
pub mod input;
pub mod proximity;

// Re-exports
pub use checklist::ChecklistState;
pub use command_palette::{CommandPaletteState, Direction};
pub use error::{ErrorSeverity, ErrorState};
pub use input::{AppTextArea, TaskDraft};
pub use proximity::ProximityTracker;

/// What the keyboard is driving underneath any overlay. The command palette
/// sits on top of every mode and is tracked separately.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal, // Dashboard shortcuts
    Checklist, // Moving through prep tasks
    TaskInput, // Typing a new prep task
    Help,      // Keybinding overlay
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub is_loading: bool,

    // --- Dashboard Data ---
    pub dashboard: Option<DashboardData>,
    pub dashboard_mode: DashboardMode,
    pub route: Route,
    pub proximity: ProximityTracker,

    // --- Prep Checklist ---
    pub checklist: ChecklistState,
    pub task_draft: Option<TaskDraft<'a>>,

    // --- Command Palette ---
    pub commands: Arc<CommandRegistry>,
    pub command_palette: CommandPaletteState,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: &'static str,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig, dashboard_mode: DashboardMode) -> Self {
        Self {
            dashboard_mode,
            commands: Arc::new(config.command_registry()),
            keymap: Arc::new(KeyMap::from_config(&config.keymap)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }

    #[must_use]
    pub fn prep_task_count(&self) -> usize {
        self.dashboard.as_ref().map_or(0, |d| d.prep_tasks.len())
    }
}

/// How long a status message stays in the footer.
pub const STATUS_TTL: std::time::Duration = std::time::Duration::from_secs(4);

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            is_loading: false,
            dashboard: None,
            dashboard_mode: DashboardMode::default(),
            route: Route::default(),
            proximity: ProximityTracker::default(),
            checklist: ChecklistState::default(),
            task_draft: None,
            commands: Arc::new(CommandRegistry::default()),
            command_palette: CommandPaletteState::default(),
            frame_count: 0,
            spinner: "⠋",
            keymap: Arc::new(KeyMap::default()),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }
}
