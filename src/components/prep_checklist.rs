use super::panel::panel_block;
use crate::domain::models::PrepTask;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct PrepChecklist<'a> {
    pub theme: &'a Theme,
    pub tasks: &'a [PrepTask],
    pub selected: Option<usize>,
    pub focused: bool,
}

impl Widget for PrepChecklist<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        let title = format!("PREP CHECKLIST {done}/{}", self.tasks.len());
        let border = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = panel_block(self.theme, glyphs::CHECK, &title, border);

        if self.tasks.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Nothing left to prepare.",
                self.theme.text_faint,
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| {
                let (glyph, style) = if task.completed {
                    (glyphs::BOX_DONE, self.theme.task_done)
                } else {
                    (glyphs::BOX_OPEN, self.theme.task_open)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {glyph} "), style),
                    Span::styled(task.text.as_str(), style),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            self.theme.list_selected
        } else {
            self.theme.highlight
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
