use crate::app::state::TaskDraft;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct TaskInputModal<'a> {
    pub theme: &'a Theme,
    pub draft: &'a TaskDraft<'a>,
}

impl Widget for TaskInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 3, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" NEW PREP TASK ", self.theme.panel_title),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::styled(" Enter", self.theme.footer_segment_key),
                Span::styled(" add  ", self.theme.text_faint),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::styled(" cancel ", self.theme.text_faint),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner_area.width > 0 && inner_area.height > 0 {
            Widget::render(&self.draft.text_area, inner_area, buf);
        }
    }
}
