use super::palette::Palette;
use ratatui::style::Color;

pub const FORGE: Palette = Palette {
    void_deep: Color::Rgb(7, 11, 16),
    void: Color::Rgb(13, 20, 29),
    void_raised: Color::Rgb(20, 29, 40),
    surface: Color::Rgb(30, 42, 56),
    surface_hi: Color::Rgb(44, 58, 76),
    text: Color::Rgb(245, 247, 251),
    text_muted: Color::Rgb(196, 206, 218),
    text_faint: Color::Rgb(141, 152, 167),
    arcane: Color::Rgb(61, 210, 255),
    ember: Color::Rgb(244, 181, 69),
    verdant: Color::Rgb(57, 217, 138),
    eldritch: Color::Rgb(139, 92, 246),
    error: Color::Rgb(255, 107, 107),
};

// Low-light variant for terminals with washed-out truecolor.
pub const EMBERGLOW: Palette = Palette {
    void_deep: Color::Rgb(18, 12, 10),
    void: Color::Rgb(28, 20, 16),
    void_raised: Color::Rgb(40, 29, 22),
    surface: Color::Rgb(58, 42, 32),
    surface_hi: Color::Rgb(78, 58, 44),
    text: Color::Rgb(250, 240, 226),
    text_muted: Color::Rgb(214, 196, 176),
    text_faint: Color::Rgb(160, 140, 120),
    arcane: Color::Rgb(110, 190, 220),
    ember: Color::Rgb(255, 170, 60),
    verdant: Color::Rgb(120, 200, 120),
    eldritch: Color::Rgb(176, 130, 230),
    error: Color::Rgb(240, 90, 80),
};
