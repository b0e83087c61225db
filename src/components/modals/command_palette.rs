use crate::app::command_palette::CommandRegistry;
use crate::app::state::CommandPaletteState;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

const WIDTH_PERCENT: u16 = 60;
const HEIGHT: u16 = 20;

/// Screen regions of the open palette. Shared with mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub list: Rect,
    pub hints: Rect,
}

#[must_use]
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let modal = centered_rect_fixed_height(WIDTH_PERCENT, HEIGHT, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Grouped results
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    PaletteLayout {
        modal,
        query: chunks[0],
        list: chunks[2],
        hints: chunks[3],
    }
}

/// First visible row of the result list, keeping the highlight on screen.
#[must_use]
pub fn list_offset(state: &CommandPaletteState, registry: &CommandRegistry, height: u16) -> usize {
    let height = usize::from(height.max(1));
    state
        .row_of_result(registry, state.selected_index)
        .map_or(0, |row| row.saturating_sub(height - 1))
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
    pub registry: &'a CommandRegistry,
}

impl CommandPaletteModal<'_> {
    fn rows(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        let mut result_idx = 0;
        for (group, members) in self.state.groups(self.registry) {
            lines.push(Line::from(Span::styled(
                format!(" {}", group.label().to_uppercase()),
                self.theme.palette_group,
            )));
            for registry_idx in members {
                let Some(entry) = self.registry.get(registry_idx) else {
                    continue;
                };
                let is_selected = result_idx == self.state.selected_index;
                let style = if is_selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if is_selected {
                    format!(" {} ", glyphs::CHEVRON)
                } else {
                    "   ".to_string()
                };

                let mut spans = vec![
                    Span::styled(prefix, style),
                    Span::styled(entry.label.as_str(), style),
                ];
                if let Some(description) = &entry.description {
                    spans.push(Span::styled(
                        format!("  {description}"),
                        self.theme.text_faint,
                    ));
                }
                if let Some(shortcut) = &entry.shortcut {
                    spans.push(Span::styled(format!("  [{shortcut}]"), self.theme.palette_shortcut));
                }
                lines.push(Line::from(spans));
                result_idx += 1;
            }
        }
        lines
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(layout.modal, buf);

        let query_line = Line::from(vec![
            Span::styled(format!(" {} ", glyphs::SEARCH), self.theme.palette_shortcut),
            Span::styled(self.state.query.as_str(), self.theme.palette_query),
            Span::styled(
                "_",
                self.theme.palette_query.add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        let separator_y = layout.query.y + 1;
        if separator_y + 1 < layout.modal.bottom() {
            let separator = "─".repeat(layout.query.width as usize);
            buf.set_string(layout.query.x, separator_y, separator, self.theme.border);
        }

        if self.state.matches.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No commands found.",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            if layout.list.height > 1 {
                buf.set_line(layout.list.x, layout.list.y + 1, &no_results, layout.list.width);
            }
        } else {
            let offset = list_offset(self.state, self.registry, layout.list.height);
            for (i, line) in self
                .rows()
                .iter()
                .skip(offset)
                .take(layout.list.height as usize)
                .enumerate()
            {
                buf.set_line(layout.list.x, layout.list.y + i as u16, line, layout.list.width);
            }
        }

        let hints = Line::from(vec![
            Span::styled(" ↑↓", self.theme.footer_segment_key),
            Span::styled(" navigate  ", self.theme.text_faint),
            Span::styled("Enter", self.theme.footer_segment_key),
            Span::styled(" run  ", self.theme.text_faint),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::styled(" close", self.theme.text_faint),
        ]);
        buf.set_line(layout.hints.x, layout.hints.y, &hints, layout.hints.width);
    }
}
