use super::panel::panel_block;
use crate::domain::models::{Pillar, Training};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

/// Training progress: streak, per-skill gauges and what to study next.
pub struct ForgePanel<'a> {
    pub theme: &'a Theme,
    pub training: &'a Training,
}

fn pillar_style(theme: &Theme, pillar: Pillar) -> Style {
    match pillar {
        Pillar::Voice => theme.gauge_arcane,
        Pillar::Improv => theme.gauge_ember,
        Pillar::Worldbuilding => theme.gauge_verdant,
        Pillar::Storytelling => theme.accent_eldritch,
    }
}

impl Widget for ForgePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.theme, glyphs::TRAINING, "THE FORGE", self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let skills = &self.training.skills;
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(skills.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let streak = Line::from(vec![
            Span::styled(format!("{} ", glyphs::STREAK), self.theme.accent_ember),
            Span::styled(
                format!("{} day streak", self.training.current_streak),
                self.theme.text,
            ),
        ]);
        Paragraph::new(streak).render(chunks[0], buf);

        for (skill, row) in skills.iter().zip(chunks.iter().skip(1)) {
            Gauge::default()
                .gauge_style(pillar_style(self.theme, skill.pillar))
                .percent(skill.progress.min(100))
                .label(format!("{} {}%", skill.name, skill.progress.min(100)))
                .render(*row, buf);
        }

        let module = &self.training.next_module;
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Next: ", self.theme.text_faint),
                Span::styled(module.name.as_str(), self.theme.text),
            ]),
            Line::from(Span::styled(
                format!("{} · {}", module.pillar.label(), module.duration),
                self.theme.text_faint,
            )),
        ];
        if let Some(achievement) = self.training.recent_achievements.first() {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", achievement.tier.label()), self.theme.accent_ember),
                Span::styled(achievement.name.as_str(), self.theme.text_muted),
            ]));
        }
        if let Some(rest) = chunks.last() {
            Paragraph::new(lines).render(*rest, buf);
        }
    }
}
