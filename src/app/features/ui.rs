use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ErrorSeverity, ErrorState},
};
use crate::domain::route::Route;
use std::time::Instant;
use tracing::error;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state.is_loading {
                state.spinner = SPINNER_FRAMES[(state.frame_count as usize) % SPINNER_FRAMES.len()];
            }
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            // Help never returns to TaskInput, so an open draft is abandoned
            state.task_draft = None;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            // Peel one layer: error, then mode, then the current screen
            if state.last_error.is_some() {
                state.last_error = None;
            } else if state.mode != AppMode::Normal {
                state.mode = AppMode::Normal;
                state.task_draft = None;
            } else if state.route != Route::Dashboard {
                state.route = Route::Dashboard;
            }
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(message) => {
            error!(%message, "Operation failed");
            state.is_loading = false;
            state.last_error = Some(
                ErrorState::new(message.clone(), ErrorSeverity::Error)
                    .with_suggestion("Press r to retry loading the dashboard"),
            );
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
