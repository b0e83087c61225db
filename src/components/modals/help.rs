use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Dashboard",
        &[
            (" Tab", "Cycle dashboard mode"),
            (" 1-4", "Studio / Prep / Training / World"),
            (" r", "Reload the dashboard"),
            (" c", "Focus the prep checklist"),
        ],
    ),
    (
        "Prep Checklist",
        &[
            (" ↓ / ↑", "Move between tasks"),
            (" Space", "Toggle task done"),
            (" a", "Add a prep task"),
        ],
    ),
    (
        "Command Palette",
        &[
            (" Ctrl+K", "Open or close"),
            (" /", "Open"),
            (" ↑ / ↓", "Move highlight (wraps)"),
            (" Enter", "Run highlighted command"),
        ],
    ),
    (
        "General",
        &[
            (" ?", "Show this help"),
            (" Esc", "Close overlay / go back"),
            (" Ctrl+C", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(60, 70, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, self.theme.palette_group)),
                Cell::from(""),
            ]));
            for (key, description) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, self.theme.footer_segment_key)),
                    Cell::from(Span::styled(*description, self.theme.list_item)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}
