use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::mode::DashboardMode;
use chrono::Local;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SetDashboardMode(mode) => UpdateResult::Handled(set_mode(state, *mode)),
        Action::CycleDashboardMode => {
            let next = state.dashboard_mode.next();
            UpdateResult::Handled(set_mode(state, next))
        }
        Action::RefreshDashboard => {
            state.is_loading = true;
            state.last_error = None;
            UpdateResult::Handled(Some(Command::LoadDashboard))
        }
        Action::DashboardLoaded(data) => {
            state.is_loading = false;
            let target = data.next_session_date();
            if state.proximity.set_target(target, Local::now()) {
                info!(
                    proximity = state.proximity.state().proximity.label(),
                    "Next session changed"
                );
            }
            state.checklist.clamp(data.prep_tasks.len());
            state.dashboard = Some((**data).clone());
            UpdateResult::Handled(None)
        }
        Action::ProximityTick(now) => {
            state.proximity.refresh(*now);
            debug!(
                proximity = state.proximity.state().proximity.label(),
                "Proximity refreshed"
            );
            UpdateResult::Handled(None)
        }
        Action::Notify(message) => {
            state.set_status(message.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn set_mode(state: &mut AppState, mode: DashboardMode) -> Option<Command> {
    if state.dashboard_mode == mode {
        return None;
    }
    info!(from = %state.dashboard_mode, to = %mode, "Dashboard mode changed");
    state.dashboard_mode = mode;
    state.set_status(mode.label());
    Some(Command::SaveDashboardMode(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::domain::proximity::SessionProximity;
    use crate::infrastructure::sample_dashboard::build_dashboard;

    #[test]
    fn test_cycle_persists_each_step() {
        let mut state = AppState::default();
        let mut saved = Vec::new();
        for _ in 0..4 {
            if let Some(Command::SaveDashboardMode(mode)) =
                reducer::update(&mut state, Action::CycleDashboardMode)
            {
                saved.push(mode);
            }
        }
        assert_eq!(
            saved,
            vec![
                DashboardMode::Prep,
                DashboardMode::Training,
                DashboardMode::World,
                DashboardMode::Studio,
            ]
        );
        assert_eq!(state.dashboard_mode, DashboardMode::Studio);
    }

    #[test]
    fn test_same_mode_is_not_saved_again() {
        let mut state = AppState::default();
        assert_eq!(
            reducer::update(&mut state, Action::SetDashboardMode(DashboardMode::Studio)),
            None
        );
        assert_eq!(
            reducer::update(&mut state, Action::SetDashboardMode(DashboardMode::World)),
            Some(Command::SaveDashboardMode(DashboardMode::World))
        );
        assert_eq!(state.status_message.as_deref(), Some("World Mode"));
    }

    #[test]
    fn test_loaded_dashboard_targets_proximity() {
        let mut state = AppState::default();
        assert_eq!(state.proximity.state().proximity, SessionProximity::None);

        state.is_loading = true;
        let data = build_dashboard(Local::now()).unwrap();
        reducer::update(&mut state, Action::DashboardLoaded(Box::new(data)));

        assert!(!state.is_loading);
        assert!(state.dashboard.is_some());
        // Three days out at 19:00 is always two to four days away
        assert_eq!(
            state.proximity.state().proximity,
            SessionProximity::Approaching
        );
        assert_eq!(state.checklist.selected(), Some(0));
    }

    #[test]
    fn test_refresh_requests_load() {
        let mut state = AppState::default();
        assert_eq!(
            reducer::update(&mut state, Action::RefreshDashboard),
            Some(Command::LoadDashboard)
        );
        assert!(state.is_loading);
    }
}
