use crate::app::state::{AppMode, AppState};
use crate::components::{
    campaign_hub::CampaignHub, footer::Footer, forge::ForgePanel, header::Header,
    modals::ModalManager, page::RoutePage, prep_checklist::PrepChecklist,
    session_countdown::SessionCountdown, world_pulse::WorldPulse,
};
use crate::domain::{mode::DashboardMode, proximity::SessionProximity, route::Route};

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Session,
    Checklist,
    Campaign,
    Forge,
    Pulse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    // Empty off the dashboard
    pub panels: Vec<(Panel, Rect)>,
}

impl AppLayout {
    #[must_use]
    pub fn panel(&self, panel: Panel) -> Option<Rect> {
        self.panels
            .iter()
            .find(|(p, _)| *p == panel)
            .map(|(_, rect)| *rect)
    }
}

/// Panels sharing the lower row in each dashboard mode.
fn lower_row(mode: DashboardMode) -> &'static [Panel] {
    match mode {
        DashboardMode::Studio => &[Panel::Campaign, Panel::Forge, Panel::Pulse],
        DashboardMode::Prep => &[Panel::Campaign],
        DashboardMode::Training => &[Panel::Forge],
        DashboardMode::World => &[Panel::Pulse],
    }
}

fn session_expanded(state: &AppState) -> bool {
    state.dashboard_mode == DashboardMode::Prep
        || matches!(
            state.proximity.state().proximity,
            SessionProximity::Today | SessionProximity::Imminent
        )
}

pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let mut layout = AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
        panels: Vec::new(),
    };

    if state.route != Route::Dashboard {
        return layout;
    }

    let expanded = session_expanded(state);
    let (top_pct, session_pct) = if expanded { (60, 60) } else { (50, 40) };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(top_pct),
            Constraint::Percentage(100 - top_pct),
        ])
        .split(layout.body);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(session_pct),
            Constraint::Percentage(100 - session_pct),
        ])
        .split(rows[0]);
    layout.panels.push((Panel::Session, top[0]));
    layout.panels.push((Panel::Checklist, top[1]));

    let lower = lower_row(state.dashboard_mode);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(lower.iter().map(|_| Constraint::Ratio(1, lower.len() as u32)))
        .split(rows[1]);
    layout
        .panels
        .extend(lower.iter().copied().zip(bottom.iter().copied()));

    layout
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &app_state.theme;

    f.render_widget(Block::default().style(theme.backdrop), area);

    let layout = get_layout(area, app_state);

    f.render_widget(
        Header {
            theme,
            route: app_state.route,
            mode: app_state.dashboard_mode,
            user: app_state.dashboard.as_ref().map(|d| &d.user),
            spinner: app_state.is_loading.then_some(app_state.spinner),
        },
        layout.header,
    );

    if app_state.route == Route::Dashboard {
        draw_dashboard(f, app_state, &layout);
    } else {
        f.render_widget(
            RoutePage {
                theme,
                route: app_state.route,
            },
            layout.body,
        );
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    f.render_widget(
        ModalManager {
            theme,
            app_state,
        },
        area,
    );
}

fn draw_dashboard(f: &mut Frame, app_state: &AppState, layout: &AppLayout) {
    let theme = &app_state.theme;

    let Some(data) = &app_state.dashboard else {
        let logo = [
            r"  ___  __  __ ___ ___  ___  ___ ___ ",
            r" |   \|  \/  | __/ _ \| _ \/ __| __|",
            r" | |) | |\/| | _| (_) |   / (_ | _| ",
            r" |___/|_|  |_|_| \___/|_|_\\___|___|",
        ];
        let mut lines: Vec<Line> = logo
            .iter()
            .map(|l| Line::from(Span::styled(*l, theme.accent_ember)))
            .collect();
        lines.push(Line::from(""));
        let status = if app_state.is_loading {
            format!("{} Stoking the forge...", app_state.spinner)
        } else {
            "Press r to load the dashboard".to_string()
        };
        lines.push(Line::from(Span::styled(status, theme.text_muted)));

        let top_pad = layout.body.height.saturating_sub(lines.len() as u16) / 2;
        let mut padded = vec![Line::from(""); top_pad as usize];
        padded.extend(lines);
        f.render_widget(
            Paragraph::new(padded).alignment(Alignment::Center),
            layout.body,
        );
        return;
    };

    let now = Local::now();
    let proximity = app_state.proximity.state();
    for (panel, rect) in &layout.panels {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        match panel {
            Panel::Session => f.render_widget(
                SessionCountdown {
                    theme,
                    proximity: &proximity,
                    session: data.next_session.as_ref(),
                },
                *rect,
            ),
            Panel::Checklist => f.render_widget(
                PrepChecklist {
                    theme,
                    tasks: &data.prep_tasks,
                    selected: app_state.checklist.selected(),
                    focused: app_state.mode == AppMode::Checklist,
                },
                *rect,
            ),
            Panel::Campaign => f.render_widget(
                CampaignHub {
                    theme,
                    campaign: data.active_campaign.as_ref(),
                    recent_sessions: &data.recent_sessions,
                    now,
                },
                *rect,
            ),
            Panel::Forge => f.render_widget(
                ForgePanel {
                    theme,
                    training: &data.training,
                },
                *rect,
            ),
            Panel::Pulse => f.render_widget(
                WorldPulse {
                    theme,
                    activity: &data.world_activity,
                    toys: &data.recent_toys,
                    now,
                },
                *rect,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{action::Action, reducer};
    use crate::infrastructure::sample_dashboard::build_dashboard;
    use ratatui::{backend::TestBackend, Terminal};

    fn panels(state: &AppState) -> Vec<Panel> {
        get_layout(Rect::new(0, 0, 120, 40), state)
            .panels
            .iter()
            .map(|(p, _)| *p)
            .collect()
    }

    #[test]
    fn test_panels_follow_mode() {
        let mut state = AppState::default();
        assert_eq!(
            panels(&state),
            vec![
                Panel::Session,
                Panel::Checklist,
                Panel::Campaign,
                Panel::Forge,
                Panel::Pulse
            ]
        );

        state.dashboard_mode = DashboardMode::Training;
        assert_eq!(
            panels(&state),
            vec![Panel::Session, Panel::Checklist, Panel::Forge]
        );

        state.dashboard_mode = DashboardMode::World;
        let layout = get_layout(Rect::new(0, 0, 120, 40), &state);
        assert_eq!(layout.panel(Panel::Pulse).map(|r| r.width), Some(120));
        assert_eq!(layout.panel(Panel::Forge), None);
    }

    #[test]
    fn test_session_expands_in_prep() {
        let mut state = AppState::default();
        let area = Rect::new(0, 0, 100, 40);
        let normal = get_layout(area, &state).panel(Panel::Session).unwrap();

        state.dashboard_mode = DashboardMode::Prep;
        let expanded = get_layout(area, &state).panel(Panel::Session).unwrap();
        assert!(expanded.width > normal.width);
        assert!(expanded.height > normal.height);
    }

    #[test]
    fn test_routes_replace_dashboard() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::Navigate("/app/academy".to_string()));
        let layout = get_layout(Rect::new(0, 0, 80, 24), &state);
        assert!(layout.panels.is_empty());
        assert_eq!(layout.body, Rect::new(0, 1, 80, 22));
    }

    #[test]
    fn test_draw_loaded_dashboard() {
        let mut state = AppState::default();
        let data = build_dashboard(Local::now()).unwrap();
        reducer::update(&mut state, Action::DashboardLoaded(Box::new(data)));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let screen = |terminal: &Terminal<TestBackend>| -> String {
            let buffer = terminal.backend().buffer();
            buffer.content().iter().map(|c| c.symbol()).collect()
        };

        terminal.draw(|f| draw(f, &state)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("NEXT SESSION"));
        // Sample session sits three days out
        assert!(text.contains("Preparation Phase"));

        reducer::update(&mut state, Action::OpenCommandPalette);
        terminal.draw(|f| draw(f, &state)).unwrap();
        assert!(screen(&terminal).contains("COMMAND PALETTE"));
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
    }
}
