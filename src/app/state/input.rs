use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// `TextArea` with the comparison and cloning `AppState` needs.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// Draft of a prep task being typed in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft<'a> {
    pub text_area: AppTextArea<'a>,
}

impl TaskDraft<'_> {
    #[must_use]
    pub fn new() -> Self {
        let mut text_area = TextArea::default();
        text_area.set_placeholder_text("What needs preparing?");
        Self {
            text_area: AppTextArea(text_area),
        }
    }

    /// Single-line task text with surrounding whitespace removed.
    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.lines().join(" ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_text_is_trimmed() {
        let mut draft = TaskDraft::new();
        draft.text_area.insert_str("  Sketch the docks map ");
        assert_eq!(draft.text(), "Sketch the docks map");
    }

    #[test]
    fn test_clone_keeps_cursor() {
        let mut draft = TaskDraft::new();
        draft.text_area.insert_str("abc");
        draft.text_area.move_cursor(CursorMove::Back);
        let copy = draft.clone();
        assert_eq!(copy, draft);
        assert_eq!(copy.text_area.cursor(), (0, 2));
    }
}
