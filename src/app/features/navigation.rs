use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};
use crate::domain::route::Route;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(path) => {
            let route = Route::from_path(path);
            if route == Route::Dashboard && path.trim_end_matches('/') != Route::Dashboard.path() {
                debug!(%path, "Unknown path, showing dashboard");
            }
            info!(from = state.route.path(), to = route.path(), "Navigate");
            state.route = route;
            // Screen-local modes don't survive a screen change
            if matches!(state.mode, AppMode::Checklist | AppMode::TaskInput) {
                state.mode = AppMode::Normal;
                state.task_draft = None;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
