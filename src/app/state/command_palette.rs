use crate::app::command_palette::{CommandAction, CommandEntry, CommandGroup, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// One open/close cycle of the palette. Everything here is discarded on
/// close, so a reopened palette always starts blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandPaletteState {
    pub is_open: bool,
    pub query: String,
    pub matches: Vec<usize>, // Registry indices in display order
    pub selected_index: usize,
}

impl CommandPaletteState {
    pub fn open(&mut self, registry: &CommandRegistry) {
        self.is_open = true;
        self.query.clear();
        self.refresh(registry);
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.matches.clear();
        self.selected_index = 0;
    }

    pub fn toggle(&mut self, registry: &CommandRegistry) {
        if self.is_open {
            self.close();
        } else {
            self.open(registry);
        }
    }

    pub fn set_query(&mut self, registry: &CommandRegistry, query: impl Into<String>) {
        self.query = query.into();
        self.refresh(registry);
    }

    pub fn push_char(&mut self, registry: &CommandRegistry, c: char) {
        self.query.push(c);
        self.refresh(registry);
    }

    pub fn pop_char(&mut self, registry: &CommandRegistry) {
        if self.query.pop().is_some() {
            self.refresh(registry);
        }
    }

    fn refresh(&mut self, registry: &CommandRegistry) {
        self.matches = registry.search(&self.query);
        self.selected_index = 0;
    }

    /// Wraps at both ends. Does nothing when there are no results.
    pub fn move_selection(&mut self, direction: Direction) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        self.selected_index = match direction {
            Direction::Down => (self.selected_index + 1) % len,
            Direction::Up => (self.selected_index + len - 1) % len,
        };
    }

    pub fn select(&mut self, index: usize) {
        if index < self.matches.len() {
            self.selected_index = index;
        }
    }

    #[must_use]
    pub fn selected<'r>(&self, registry: &'r CommandRegistry) -> Option<&'r CommandEntry> {
        self.matches
            .get(self.selected_index)
            .and_then(|&idx| registry.get(idx))
    }

    /// Hands back the highlighted command's action and closes the palette.
    /// With nothing highlighted the palette stays open and `None` is returned.
    pub fn execute_selected(&mut self, registry: &CommandRegistry) -> Option<CommandAction> {
        let action = self.selected(registry)?.action.clone();
        self.close();
        Some(action)
    }

    #[must_use]
    pub fn groups(&self, registry: &CommandRegistry) -> Vec<(CommandGroup, Vec<usize>)> {
        registry.group(&self.matches)
    }

    /// Map a rendered row (group headers included) to a result index.
    #[must_use]
    pub fn result_at_row(&self, registry: &CommandRegistry, row: usize) -> Option<usize> {
        let mut current_row = 0;
        let mut result_idx = 0;
        for (_, members) in self.groups(registry) {
            // Group header
            if row == current_row {
                return None;
            }
            current_row += 1;
            if row < current_row + members.len() {
                return Some(result_idx + (row - current_row));
            }
            current_row += members.len();
            result_idx += members.len();
        }
        None
    }

    /// Rendered row of the result at `index`, counting group headers.
    #[must_use]
    pub fn row_of_result(&self, registry: &CommandRegistry, index: usize) -> Option<usize> {
        let mut current_row = 0;
        let mut result_idx = 0;
        for (_, members) in self.groups(registry) {
            current_row += 1;
            if index < result_idx + members.len() {
                return Some(current_row + (index - result_idx));
            }
            current_row += members.len();
            result_idx += members.len();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;

    fn registry() -> CommandRegistry {
        CommandRegistry::new(vec![
            CommandEntry::navigate("go-home", CommandGroup::Navigation, "Go Home", "/app/home"),
            CommandEntry::invoke("help", CommandGroup::Action, "Help", Action::ToggleHelp),
            CommandEntry::navigate("go-world", CommandGroup::Navigation, "Go World", "/app/world"),
        ])
    }

    fn open_state(registry: &CommandRegistry) -> CommandPaletteState {
        let mut state = CommandPaletteState::default();
        state.open(registry);
        state
    }

    #[test]
    fn test_open_close_lifecycle() {
        let registry = registry();
        let mut state = open_state(&registry);
        assert!(state.is_open);
        assert_eq!(state.matches.len(), 3);

        state.set_query(&registry, "world");
        state.close();
        assert!(!state.is_open);
        assert!(state.query.is_empty());
        assert_eq!(state.selected_index, 0);

        state.open(&registry);
        assert!(state.query.is_empty());
        assert_eq!(state.selected_index, 0);

        // Idempotent
        state.open(&registry);
        assert!(state.is_open);
        state.close();
        state.close();
        assert!(!state.is_open);
    }

    #[test]
    fn test_toggle() {
        let registry = registry();
        let mut state = CommandPaletteState::default();
        state.toggle(&registry);
        assert!(state.is_open);
        state.toggle(&registry);
        assert!(!state.is_open);
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let registry = registry();
        let mut state = open_state(&registry);

        state.move_selection(Direction::Down);
        state.move_selection(Direction::Down);
        assert_eq!(state.selected_index, 2);
        state.move_selection(Direction::Down);
        assert_eq!(state.selected_index, 0);
        state.move_selection(Direction::Up);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_selection_noop_when_empty() {
        let registry = registry();
        let mut state = open_state(&registry);
        state.set_query(&registry, "zzz");
        state.move_selection(Direction::Down);
        state.move_selection(Direction::Up);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let registry = registry();
        let mut state = open_state(&registry);
        state.move_selection(Direction::Down);
        state.push_char(&registry, 'g');
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_matches_follow_group_order() {
        let registry = registry();
        let state = open_state(&registry);
        // Navigation entries are gathered ahead of the action entry
        assert_eq!(state.matches, vec![0, 2, 1]);
    }

    #[test]
    fn test_execute_on_empty_keeps_open() {
        let registry = registry();
        let mut state = open_state(&registry);
        state.set_query(&registry, "zzz");
        assert_eq!(state.execute_selected(&registry), None);
        assert!(state.is_open);
        assert_eq!(state.query, "zzz");
    }

    #[test]
    fn test_execute_returns_action_and_closes() {
        let registry = registry();
        let mut state = open_state(&registry);
        state.move_selection(Direction::Down);
        assert_eq!(
            state.execute_selected(&registry),
            Some(CommandAction::NavigateTo("/app/world".to_string()))
        );
        assert!(!state.is_open);
        assert!(state.query.is_empty());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let registry = registry();
        let mut state = open_state(&registry);
        state.select(2);
        assert_eq!(state.selected_index, 2);
        state.select(7);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_rows_include_group_headers() {
        let registry = registry();
        let state = open_state(&registry);
        // 0: Navigation, 1: Go Home, 2: Go World, 3: Actions, 4: Help
        assert_eq!(state.result_at_row(&registry, 0), None);
        assert_eq!(state.result_at_row(&registry, 1), Some(0));
        assert_eq!(state.result_at_row(&registry, 2), Some(1));
        assert_eq!(state.result_at_row(&registry, 3), None);
        assert_eq!(state.result_at_row(&registry, 4), Some(2));
        assert_eq!(state.result_at_row(&registry, 5), None);

        assert_eq!(state.row_of_result(&registry, 2), Some(4));
        assert_eq!(state.row_of_result(&registry, 3), None);
    }
}
