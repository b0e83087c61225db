use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, TaskDraft},
};
use crate::domain::models::PrepTask;
use chrono::Local;
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusChecklist => {
            let len = state.prep_task_count();
            if len > 0 {
                state.mode = AppMode::Checklist;
                state.checklist.clamp(len);
            }
            UpdateResult::Handled(None)
        }
        Action::SelectNextTask => {
            let len = state.prep_task_count();
            state.checklist.select_next(len);
            UpdateResult::Handled(None)
        }
        Action::SelectPrevTask => {
            let len = state.prep_task_count();
            state.checklist.select_prev(len);
            UpdateResult::Handled(None)
        }
        Action::ToggleSelectedTask => {
            let selected = state.checklist.selected();
            if let (Some(data), Some(idx)) = (&mut state.dashboard, selected) {
                if let Some(task) = data.prep_tasks.get_mut(idx) {
                    task.completed = !task.completed;
                    debug!(id = %task.id, completed = task.completed, "Toggled prep task");
                }
            }
            UpdateResult::Handled(None)
        }
        Action::AddTaskIntent => {
            if state.dashboard.is_some() {
                state.mode = AppMode::TaskInput;
                state.task_draft = Some(TaskDraft::new());
            }
            UpdateResult::Handled(None)
        }
        Action::TaskInputKey(key) => {
            if let Some(draft) = &mut state.task_draft {
                draft.text_area.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitTask => {
            let text = state
                .task_draft
                .as_ref()
                .map(TaskDraft::text)
                .unwrap_or_default();
            if text.is_empty() {
                return UpdateResult::Handled(None);
            }
            if let Some(data) = &mut state.dashboard {
                let id = next_task_id(&data.prep_tasks);
                debug!(%id, "Added prep task");
                data.prep_tasks.push(PrepTask {
                    id,
                    text,
                    completed: false,
                });
                let len = data.prep_tasks.len();
                state.checklist.list_state.select(Some(len - 1));
            }
            state.task_draft = None;
            state.mode = AppMode::Checklist;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// `prep-<millis>`, nudged forward if two tasks land in the same millisecond.
fn next_task_id(tasks: &[PrepTask]) -> String {
    let mut stamp = Local::now().timestamp_millis();
    loop {
        let id = format!("prep-{stamp}");
        if tasks.iter().all(|t| t.id != id) {
            return id;
        }
        stamp += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::infrastructure::sample_dashboard::build_dashboard;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn loaded_state<'a>() -> AppState<'a> {
        let mut state = AppState::default();
        let data = build_dashboard(Local::now()).unwrap();
        reducer::update(&mut state, Action::DashboardLoaded(Box::new(data)));
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            reducer::update(
                state,
                Action::TaskInputKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    #[test]
    fn test_focus_requires_tasks() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::FocusChecklist);
        assert_eq!(state.mode, AppMode::Normal);

        let mut state = loaded_state();
        reducer::update(&mut state, Action::FocusChecklist);
        assert_eq!(state.mode, AppMode::Checklist);
    }

    #[test]
    fn test_toggle_selected_task() {
        let mut state = loaded_state();
        reducer::update(&mut state, Action::FocusChecklist);
        reducer::update(&mut state, Action::SelectNextTask);
        reducer::update(&mut state, Action::SelectNextTask);
        reducer::update(&mut state, Action::ToggleSelectedTask);

        let data = state.dashboard.as_ref().unwrap();
        assert!(data.prep_tasks[2].completed);
        assert_eq!(data.prep_completion(), 60);
    }

    #[test]
    fn test_add_task() {
        let mut state = loaded_state();
        reducer::update(&mut state, Action::FocusChecklist);
        reducer::update(&mut state, Action::AddTaskIntent);
        assert_eq!(state.mode, AppMode::TaskInput);

        type_text(&mut state, "Roll loot for the vault");
        reducer::update(&mut state, Action::SubmitTask);

        assert_eq!(state.mode, AppMode::Checklist);
        assert!(state.task_draft.is_none());
        let tasks = &state.dashboard.as_ref().unwrap().prep_tasks;
        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks[5].text, "Roll loot for the vault");
        assert!(tasks[5].id.starts_with("prep-"));
        assert_eq!(state.checklist.selected(), Some(5));
    }

    #[test]
    fn test_blank_task_is_ignored() {
        let mut state = loaded_state();
        reducer::update(&mut state, Action::AddTaskIntent);
        type_text(&mut state, "   ");
        reducer::update(&mut state, Action::SubmitTask);

        assert_eq!(state.mode, AppMode::TaskInput);
        assert_eq!(state.dashboard.as_ref().unwrap().prep_tasks.len(), 5);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let tasks = vec![PrepTask {
            id: format!("prep-{}", Local::now().timestamp_millis()),
            text: String::new(),
            completed: false,
        }];
        let id = next_task_id(&tasks);
        assert_ne!(id, tasks[0].id);
    }
}
