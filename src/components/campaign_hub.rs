use super::panel::panel_block;
use crate::domain::{models::{Campaign, PastSession, ThreadStatus}, time::format_relative_time};
use crate::theme::{glyphs, Theme};
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const MAX_THREADS: usize = 3;
const MAX_SESSIONS: usize = 2;

/// Active campaign at a glance: arc, stats, live threads and recent sessions.
pub struct CampaignHub<'a> {
    pub theme: &'a Theme,
    pub campaign: Option<&'a Campaign>,
    pub recent_sessions: &'a [PastSession],
    pub now: DateTime<Local>,
}

impl Widget for CampaignHub<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.theme, glyphs::CAMPAIGN, "CAMPAIGN", self.theme.border);

        let Some(campaign) = self.campaign else {
            Paragraph::new(Span::styled("No active campaign", self.theme.text_faint))
                .block(block)
                .render(area, buf);
            return;
        };

        let stats = campaign.stats;
        let mut lines = vec![
            Line::from(Span::styled(campaign.name.as_str(), self.theme.accent_arcane)),
            Line::from(Span::styled(campaign.current_arc.as_str(), self.theme.text_muted)),
            Line::from(Span::styled(
                format!(
                    "{} sessions · {} NPCs · {} locations · {} players",
                    stats.sessions, stats.npcs, stats.locations, stats.players
                ),
                self.theme.text_faint,
            )),
            Line::from(""),
        ];

        for thread in campaign
            .plot_threads
            .iter()
            .filter(|t| t.status == ThreadStatus::Active)
            .take(MAX_THREADS)
        {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", glyphs::DOT), self.theme.accent_ember),
                Span::styled(thread.name.as_str(), self.theme.text),
            ]));
        }

        if !self.recent_sessions.is_empty() {
            lines.push(Line::from(""));
            for session in self.recent_sessions.iter().take(MAX_SESSIONS) {
                let mut spans = vec![
                    Span::styled(session.name.as_str(), self.theme.text_muted),
                    Span::styled(
                        format!("  {}", format_relative_time(session.date, self.now)),
                        self.theme.text_faint,
                    ),
                ];
                if let Some(rating) = session.rating {
                    spans.push(Span::styled(
                        format!("  {}", "★".repeat(usize::from(rating.min(5)))),
                        self.theme.accent_ember,
                    ));
                }
                lines.push(Line::from(spans));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
