use crate::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

/// Rounded frame with a glyph title shared by the dashboard panels.
pub fn panel_block<'a>(theme: &Theme, glyph: &'a str, title: &'a str, border: Style) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(glyph, border),
            Span::styled(format!(" {title} "), theme.panel_title),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}
