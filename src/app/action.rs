use crate::app::command::Command;
use crate::domain::{mode::DashboardMode, models::DashboardData};
use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    CancelMode,
    ToggleHelp,

    // --- Command Palette ---
    OpenCommandPalette,
    CloseCommandPalette,
    ToggleCommandPalette,
    CommandPaletteInput(char),
    CommandPaletteBackspace,
    CommandPaletteNext,
    CommandPalettePrev,
    CommandPaletteHover(usize), // Pointer moved over a flattened result row
    CommandPaletteClick(usize), // Select and execute a flattened result row
    CommandPaletteSelect,       // Execute the highlighted result

    // --- Navigation ---
    Navigate(String), // Opaque path, resolved by `Route::from_path`

    // --- Dashboard ---
    SetDashboardMode(DashboardMode),
    CycleDashboardMode,
    RefreshDashboard,
    Notify(String),

    // --- Prep Checklist ---
    FocusChecklist,
    SelectNextTask,
    SelectPrevTask,
    ToggleSelectedTask,
    AddTaskIntent,
    TaskInputKey(KeyEvent),
    SubmitTask,

    // --- Async Results ---
    DashboardLoaded(Box<DashboardData>),
    ProximityTick(DateTime<Local>),
    ErrorOccurred(String),
}
