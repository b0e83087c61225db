use super::panel::panel_block;
use crate::domain::{
    models::{Toy, WorldActivity},
    time::format_relative_time,
};
use crate::theme::{glyphs, Theme};
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Recent world edits followed by the generators used lately.
pub struct WorldPulse<'a> {
    pub theme: &'a Theme,
    pub activity: &'a [WorldActivity],
    pub toys: &'a [Toy],
    pub now: DateTime<Local>,
}

impl Widget for WorldPulse<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.theme, glyphs::WORLD, "WORLD PULSE", self.theme.border);

        let mut lines: Vec<Line> = self
            .activity
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!("{:<9} ", entry.kind.label()), self.theme.accent_eldritch),
                    Span::styled(entry.name.as_str(), self.theme.text),
                    Span::styled(
                        format!(
                            " {} {}",
                            entry.verb.label(),
                            format_relative_time(entry.timestamp, self.now)
                        ),
                        self.theme.text_faint,
                    ),
                ])
            })
            .collect();

        if lines.is_empty() {
            lines.push(Line::from(Span::styled("The world is quiet.", self.theme.text_faint)));
        }

        if !self.toys.is_empty() {
            lines.push(Line::from(""));
            let names = self
                .toys
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(" · ");
            lines.push(Line::from(vec![
                Span::styled("Toybox: ", self.theme.text_faint),
                Span::styled(names, self.theme.text_muted),
            ]));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
