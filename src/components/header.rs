use crate::domain::{mode::DashboardMode, models::User, route::Route};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Powerline strip: logo, current screen, dashboard mode and the signed-in DM.
pub struct Header<'a> {
    pub theme: &'a Theme,
    pub route: Route,
    pub mode: DashboardMode,
    pub user: Option<&'a User>,
    pub spinner: Option<&'a str>,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let route_bg = self.theme.header_route.bg.unwrap_or(Color::Reset);
        let mode_bg = self.theme.header_mode.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let show_mode = self.route == Route::Dashboard;
        let route_next_bg = if show_mode { mode_bg } else { base_bg };

        let mut spans = vec![
            Span::styled(format!(" {} DMFORGE ", glyphs::FORGE), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(route_bg)),
            Span::styled(format!(" {} ", self.route.title()), self.theme.header_route),
            Span::styled(
                glyphs::SEP_RIGHT,
                Style::default().fg(route_bg).bg(route_next_bg),
            ),
        ];

        if show_mode {
            spans.push(Span::styled(
                format!(" {} ", self.mode.label()),
                self.theme.header_mode,
            ));
            spans.push(Span::styled(
                glyphs::SEP_RIGHT,
                Style::default().fg(mode_bg).bg(base_bg),
            ));
        }

        if let Some(spinner) = self.spinner {
            spans.push(Span::styled(format!(" {spinner}"), self.theme.header));
        }

        let mut right = Vec::new();
        if let Some(user) = self.user {
            let user_bg = self.theme.header_user.bg.unwrap_or(Color::Reset);
            right.push(Span::styled(
                glyphs::SEP_LEFT,
                Style::default().fg(user_bg).bg(base_bg),
            ));
            right.push(Span::styled(
                format!(
                    " {} {} {} · {} ",
                    user.name,
                    glyphs::STREAK,
                    user.training_streak,
                    user.tier.label()
                ),
                self.theme.header_user,
            ));
        }

        let left_width: usize = spans.iter().map(Span::width).sum();
        let right_width: usize = right.iter().map(Span::width).sum();
        let fill = (area.width as usize).saturating_sub(left_width + right_width);
        spans.push(Span::styled(" ".repeat(fill), self.theme.header));
        spans.extend(right);

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MemberTier;

    fn row_text(buf: &Buffer) -> String {
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_mode_only_on_dashboard() {
        let theme = Theme::default();
        let user = User {
            name: "Mira".to_string(),
            tier: MemberTier::Forge,
            training_streak: 7,
        };
        let area = Rect::new(0, 0, 100, 1);

        let mut buf = Buffer::empty(area);
        Header {
            theme: &theme,
            route: Route::Dashboard,
            mode: DashboardMode::Prep,
            user: Some(&user),
            spinner: None,
        }
        .render(area, &mut buf);
        let text = row_text(&buf);
        assert!(text.contains("DMFORGE"));
        assert!(text.contains("Prep Mode"));
        assert!(text.contains("Mira"));

        let mut buf = Buffer::empty(area);
        Header {
            theme: &theme,
            route: Route::Academy,
            mode: DashboardMode::Prep,
            user: None,
            spinner: None,
        }
        .render(area, &mut buf);
        let text = row_text(&buf);
        assert!(text.contains("Academy"));
        assert!(!text.contains("Prep Mode"));
    }
}
