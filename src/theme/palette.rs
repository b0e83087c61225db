use ratatui::style::Color;

pub struct Palette {
    pub void_deep: Color,
    pub void: Color,
    pub void_raised: Color,
    pub surface: Color,
    pub surface_hi: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_faint: Color,
    pub arcane: Color,
    pub ember: Color,
    pub verdant: Color,
    pub eldritch: Color,
    pub error: Color,
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Used to derive subtle background tints from palette foreground colors.
/// Non-Rgb `Color` variants are returned as-is.
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_color() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim_color(Color::Reset, 0.5), Color::Reset);
    }
}
