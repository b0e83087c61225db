use ratatui::widgets::ListState;

/// Cursor over the prep checklist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistState {
    pub list_state: ListState,
}

impl ChecklistState {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.list_state.select(Some(prev));
    }

    /// Keep the cursor inside a list that may have shrunk or grown.
    pub fn clamp(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(i), _) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = ChecklistState::default();
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_prev(3);
        assert_eq!(state.selected(), Some(2));
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_clamp() {
        let mut state = ChecklistState::default();
        state.clamp(4);
        assert_eq!(state.selected(), Some(0));
        state.list_state.select(Some(3));
        state.clamp(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }
}
