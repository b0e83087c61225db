use super::panel::panel_block;
use crate::domain::route::Route;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Placeholder body for screens other than the dashboard.
pub struct RoutePage<'a> {
    pub theme: &'a Theme,
    pub route: Route,
}

impl Widget for RoutePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.theme, glyphs::FORGE, self.route.title(), self.theme.border);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.route.title(), self.theme.accent_arcane)),
            Line::from(Span::styled(self.route.subtitle(), self.theme.text_muted)),
            Line::from(""),
            Line::from(Span::styled(self.route.path(), self.theme.text_faint)),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Esc ", self.theme.footer_segment_key),
                Span::styled(" back to the dashboard", self.theme.text_faint),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
