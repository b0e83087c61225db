use crate::app::{
    action::{Action, UpdateResult},
    command_palette::CommandAction,
    reducer,
    state::{AppState, Direction},
};
use std::sync::Arc;
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let commands = Arc::clone(&state.commands);
    let palette = &mut state.command_palette;

    match action {
        Action::OpenCommandPalette => {
            palette.open(&commands);
            UpdateResult::Handled(None)
        }
        Action::CloseCommandPalette => {
            palette.close();
            UpdateResult::Handled(None)
        }
        Action::ToggleCommandPalette => {
            palette.toggle(&commands);
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteInput(c) => {
            if palette.is_open {
                palette.push_char(&commands, *c);
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteBackspace => {
            if palette.is_open {
                palette.pop_char(&commands);
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteNext => {
            palette.move_selection(Direction::Down);
            UpdateResult::Handled(None)
        }
        Action::CommandPalettePrev => {
            palette.move_selection(Direction::Up);
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteHover(idx) => {
            palette.select(*idx);
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteClick(idx) => {
            if *idx >= palette.matches.len() {
                return UpdateResult::Handled(None);
            }
            palette.select(*idx);
            execute(state)
        }
        Action::CommandPaletteSelect => execute(state),
        _ => UpdateResult::NotHandled,
    }
}

fn execute(state: &mut AppState) -> UpdateResult {
    let commands = Arc::clone(&state.commands);
    if let Some(entry) = state.command_palette.selected(&commands) {
        debug!(id = %entry.id, "Running palette command");
    }

    // Resolved exhaustively: every command is either a route or an action
    let follow_up = match state.command_palette.execute_selected(&commands) {
        None => return UpdateResult::Handled(None),
        Some(CommandAction::NavigateTo(path)) => Action::Navigate(path),
        Some(CommandAction::Invoke(action)) => action,
    };
    UpdateResult::Handled(reducer::update(state, follow_up))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::Command;
    use crate::domain::{mode::DashboardMode, route::Route};

    fn type_query(state: &mut AppState, query: &str) {
        for c in query.chars() {
            reducer::update(state, Action::CommandPaletteInput(c));
        }
    }

    #[test]
    fn test_navigate_command_changes_route() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenCommandPalette);
        type_query(&mut state, "academy");
        let command = reducer::update(&mut state, Action::CommandPaletteSelect);

        assert_eq!(command, None);
        assert_eq!(state.route, Route::Academy);
        assert!(!state.command_palette.is_open);
        assert!(state.command_palette.query.is_empty());
    }

    #[test]
    fn test_invoke_command_dispatches_action() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenCommandPalette);
        type_query(&mut state, "prep mode");
        let command = reducer::update(&mut state, Action::CommandPaletteSelect);

        assert_eq!(state.dashboard_mode, DashboardMode::Prep);
        assert_eq!(command, Some(Command::SaveDashboardMode(DashboardMode::Prep)));
    }

    #[test]
    fn test_select_with_no_results_stays_open() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenCommandPalette);
        type_query(&mut state, "zzz");
        reducer::update(&mut state, Action::CommandPaletteSelect);

        assert!(state.command_palette.is_open);
        assert_eq!(state.command_palette.query, "zzz");
    }

    #[test]
    fn test_click_runs_the_clicked_row() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenCommandPalette);
        // Blank query: the four navigation entries come first
        reducer::update(&mut state, Action::CommandPaletteClick(1));
        assert_eq!(state.route, Route::Campaign);
        assert!(!state.command_palette.is_open);

        reducer::update(&mut state, Action::OpenCommandPalette);
        reducer::update(&mut state, Action::CommandPaletteClick(99));
        assert!(state.command_palette.is_open);
    }

    #[test]
    fn test_input_ignored_while_closed() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::CommandPaletteInput('x'));
        assert!(state.command_palette.query.is_empty());
        assert!(!state.command_palette.is_open);
    }

    #[test]
    fn test_toggle_twice_resets() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleCommandPalette);
        type_query(&mut state, "go");
        reducer::update(&mut state, Action::CommandPaletteNext);
        reducer::update(&mut state, Action::ToggleCommandPalette);
        reducer::update(&mut state, Action::ToggleCommandPalette);

        assert!(state.command_palette.is_open);
        assert!(state.command_palette.query.is_empty());
        assert_eq!(state.command_palette.selected_index, 0);
    }
}
