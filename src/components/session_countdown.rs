use super::panel::panel_block;
use crate::domain::{
    models::NextSession,
    proximity::{Accent, ProximityState, SessionProximity},
    time::format_session_date,
};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

const VISIBLE_PLAYERS: usize = 4;

pub struct SessionCountdown<'a> {
    pub theme: &'a Theme,
    pub proximity: &'a ProximityState,
    pub session: Option<&'a NextSession>,
}

fn accent_style(theme: &Theme, accent: Accent) -> Style {
    match accent {
        Accent::Muted => theme.accent_muted,
        Accent::Ember => theme.accent_ember,
        Accent::Arcane => theme.accent_arcane,
    }
}

/// Big countdown figure: hours once the session is within reach, days before.
#[must_use]
pub fn countdown_value(state: &ProximityState) -> String {
    match state.proximity {
        SessionProximity::None => "--".to_string(),
        SessionProximity::Past => "Done".to_string(),
        SessionProximity::Today | SessionProximity::Imminent => {
            format!("{}h {:02}m", state.hours_until, state.minutes_until % 60)
        }
        SessionProximity::Approaching | SessionProximity::Distant => {
            let unit = if state.days_until == 1 { "day" } else { "days" };
            format!("{} {unit}", state.days_until)
        }
    }
}

/// First few names, then a `+N` for the rest.
#[must_use]
pub fn player_summary(players: &[String]) -> String {
    let mut summary = players
        .iter()
        .take(VISIBLE_PLAYERS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if players.len() > VISIBLE_PLAYERS {
        summary.push_str(&format!(" +{}", players.len() - VISIBLE_PLAYERS));
    }
    summary
}

impl Widget for SessionCountdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_style(self.theme, self.proximity.accent);
        let border = if self.proximity.is_urgent {
            self.theme.border_urgent
        } else {
            self.theme.border
        };
        let block = panel_block(self.theme, glyphs::SESSION, "NEXT SESSION", border);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(session) = self.session else {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(self.proximity.message, self.theme.text_muted)),
                Line::from(Span::styled(
                    "Press Ctrl+K and choose New Session",
                    self.theme.text_faint,
                )),
            ])
            .render(inner, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Details
                Constraint::Length(1), // Countdown window
                Constraint::Length(1), // Prep progress
            ])
            .split(inner);

        let mut value_style = self.theme.countdown_value;
        if self.proximity.is_urgent {
            value_style = value_style.patch(accent).add_modifier(Modifier::BOLD);
        }

        let lines = vec![
            Line::from(Span::styled(self.proximity.message, accent)),
            Line::from(Span::styled(countdown_value(self.proximity), value_style)),
            Line::from(Span::styled(
                format_session_date(session.date),
                self.theme.text_muted,
            )),
            Line::from(vec![
                Span::styled(format!("{} ", glyphs::CAMPAIGN), self.theme.text_faint),
                Span::styled(session.campaign_name.as_str(), self.theme.text),
            ]),
            Line::from(Span::styled(
                player_summary(&session.players),
                self.theme.text_faint,
            )),
        ];
        Paragraph::new(lines).render(chunks[0], buf);

        let window_style = match self.proximity.accent {
            Accent::Ember => self.theme.gauge_ember,
            Accent::Arcane | Accent::Muted => self.theme.gauge_arcane,
        };
        Gauge::default()
            .gauge_style(window_style)
            .percent(self.proximity.countdown_progress())
            .label("countdown")
            .render(chunks[1], buf);

        let prep = session.prep_progress.min(100);
        Gauge::default()
            .gauge_style(self.theme.gauge_verdant)
            .percent(prep)
            .label(format!("prep {prep}%"))
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proximity::classify;
    use chrono::{Duration, Local};

    #[test]
    fn test_countdown_value_switches_units() {
        let now = Local::now();
        let soon = now + Duration::hours(5) + Duration::minutes(7);
        assert_eq!(countdown_value(&classify(Some(&soon), &now)), "5h 07m");

        let later = now + Duration::days(3);
        assert_eq!(countdown_value(&classify(Some(&later), &now)), "3 days");

        assert_eq!(countdown_value(&ProximityState::NONE), "--");
    }

    #[test]
    fn test_player_summary_truncates() {
        let players: Vec<String> = ["Ash", "Bex", "Cy", "Dov", "Eli", "Fen"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(player_summary(&players[..2]), "Ash, Bex");
        assert_eq!(player_summary(&players), "Ash, Bex, Cy, Dov +2");
    }

    #[test]
    fn test_renders_empty_state() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        SessionCountdown {
            theme: &theme,
            proximity: &ProximityState::NONE,
            session: None,
        }
        .render(area, &mut buf);
        let row: String = (0..40).map(|x| buf[(x, 2)].symbol()).collect();
        assert!(row.contains("No session scheduled"));
    }
}
