use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod forge;
pub mod glyphs;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub border_urgent: Style,
    pub panel_title: Style,

    pub text: Style,
    pub text_muted: Style,
    pub text_faint: Style,

    pub accent_arcane: Style,
    pub accent_ember: Style,
    pub accent_eldritch: Style,
    pub accent_muted: Style,

    pub countdown_value: Style,
    pub gauge_arcane: Style,
    pub gauge_ember: Style,
    pub gauge_verdant: Style,

    pub task_done: Style,
    pub task_open: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_route: Style,
    pub header_mode: Style,
    pub header_user: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub palette_query: Style,
    pub palette_group: Style,
    pub palette_shortcut: Style,

    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub backdrop: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Forge,
    Emberglow,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Forge => "Forge",
            PaletteType::Emberglow => "Emberglow",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Forge => Self::from_palette(&forge::FORGE),
            PaletteType::Emberglow => Self::from_palette(&forge::EMBERGLOW),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface_hi),
            border_focus: Style::default().fg(p.arcane),
            border_urgent: Style::default().fg(p.ember).add_modifier(Modifier::BOLD),
            panel_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),

            text: Style::default().fg(p.text),
            text_muted: Style::default().fg(p.text_muted),
            text_faint: Style::default().fg(p.text_faint),

            accent_arcane: Style::default().fg(p.arcane).add_modifier(Modifier::BOLD),
            accent_ember: Style::default().fg(p.ember).add_modifier(Modifier::BOLD),
            accent_eldritch: Style::default().fg(p.eldritch).add_modifier(Modifier::BOLD),
            accent_muted: Style::default().fg(p.text_faint),

            countdown_value: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            gauge_arcane: Style::default().fg(p.arcane).bg(dim_color(p.arcane, 0.2)),
            gauge_ember: Style::default().fg(p.ember).bg(dim_color(p.ember, 0.2)),
            gauge_verdant: Style::default().fg(p.verdant).bg(dim_color(p.verdant, 0.2)),

            task_done: Style::default()
                .fg(p.text_faint)
                .add_modifier(Modifier::CROSSED_OUT),
            task_open: Style::default().fg(p.text),

            status_ready: Style::default()
                .bg(p.verdant)
                .fg(p.void_deep)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.arcane)
                .fg(p.void_deep)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.ember)
                .fg(p.void_deep)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.error)
                .fg(p.void_deep)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.ember)
                .fg(p.void_deep)
                .add_modifier(Modifier::BOLD),
            header_route: Style::default()
                .bg(p.surface)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_mode: Style::default()
                .bg(p.arcane)
                .fg(p.void_deep)
                .add_modifier(Modifier::BOLD),
            header_user: Style::default().bg(p.void_raised).fg(p.text_muted),
            header: Style::default().bg(p.void).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.void_raised)
                .fg(p.arcane)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.void).fg(p.text_muted),
            footer_group_name: Style::default().fg(p.text_faint).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.void_deep).fg(p.text_faint),

            palette_query: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            palette_group: Style::default()
                .fg(p.text_faint)
                .add_modifier(Modifier::BOLD),
            palette_shortcut: Style::default().fg(p.text_faint).bg(p.void_raised),

            highlight: Style::default().bg(p.surface).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(dim_color(p.arcane, 0.3))
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text_muted),
            backdrop: Style::default().bg(p.void_deep),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Forge)
    }
}
