use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui::{self, Panel},
};
use crate::components::modals::{
    command_palette::{list_offset, palette_layout},
    helpers::contains,
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, area),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+K and Ctrl+C work from every layer
    if let Some(action) = app_state.keymap.chord(key) {
        return Some(action);
    }

    if app_state.command_palette.is_open {
        return palette_key(key);
    }

    if app_state.last_error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::CancelMode),
            KeyCode::Char('r') => Some(Action::RefreshDashboard),
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::TaskInput => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => Some(Action::SubmitTask),
            _ => Some(Action::TaskInputKey(key)),
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Normal | AppMode::Checklist => app_state.keymap.get_action(key, app_state.mode),
    }
}

fn palette_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CloseCommandPalette),
        KeyCode::Up | KeyCode::BackTab => Some(Action::CommandPalettePrev),
        KeyCode::Down | KeyCode::Tab => Some(Action::CommandPaletteNext),
        KeyCode::Enter => Some(Action::CommandPaletteSelect),
        KeyCode::Backspace => Some(Action::CommandPaletteBackspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::CommandPaletteInput(c))
        }
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    if app_state.command_palette.is_open {
        return palette_mouse(mouse, app_state, area);
    }
    if app_state.last_error.is_some()
        || !matches!(app_state.mode, AppMode::Normal | AppMode::Checklist)
    {
        return None;
    }

    let layout = ui::get_layout(area, app_state);
    let checklist = layout.panel(Panel::Checklist)?;
    if !contains(checklist, mouse.column, mouse.row) {
        return None;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown if app_state.mode == AppMode::Checklist => {
            Some(Action::SelectNextTask)
        }
        MouseEventKind::ScrollUp if app_state.mode == AppMode::Checklist => {
            Some(Action::SelectPrevTask)
        }
        MouseEventKind::Down(MouseButton::Left) if app_state.mode == AppMode::Normal => {
            Some(Action::FocusChecklist)
        }
        _ => None,
    }
}

fn palette_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = palette_layout(area);
    let palette = &app_state.command_palette;
    let registry = &app_state.commands;

    let result_under_pointer = || {
        if !contains(layout.list, mouse.column, mouse.row) {
            return None;
        }
        let offset = list_offset(palette, registry, layout.list.height);
        let row = usize::from(mouse.row - layout.list.y) + offset;
        palette.result_at_row(registry, row)
    };

    match mouse.kind {
        MouseEventKind::Moved => result_under_pointer().map(Action::CommandPaletteHover),
        MouseEventKind::Down(MouseButton::Left) => {
            if !contains(layout.modal, mouse.column, mouse.row) {
                Some(Action::CloseCommandPalette)
            } else {
                result_under_pointer().map(Action::CommandPaletteClick)
            }
        }
        MouseEventKind::ScrollDown => Some(Action::CommandPaletteNext),
        MouseEventKind::ScrollUp => Some(Action::CommandPalettePrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::domain::mode::DashboardMode;
    use crate::infrastructure::sample_dashboard::build_dashboard;
    use chrono::Local;

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn map(state: &AppState, event: Event) -> Option<Action> {
        map_event_to_action(event, state, SIZE)
    }

    #[test]
    fn test_palette_captures_keys() {
        let mut state = AppState::default();
        assert_eq!(
            map(&state, press(KeyCode::Char('1'))),
            Some(Action::SetDashboardMode(DashboardMode::Studio))
        );

        reducer::update(&mut state, Action::OpenCommandPalette);
        assert_eq!(
            map(&state, press(KeyCode::Char('1'))),
            Some(Action::CommandPaletteInput('1'))
        );
        assert_eq!(
            map(&state, press(KeyCode::Tab)),
            Some(Action::CommandPaletteNext)
        );
        assert_eq!(
            map(&state, press(KeyCode::Esc)),
            Some(Action::CloseCommandPalette)
        );
        assert_eq!(map(&state, ctrl('k')), Some(Action::ToggleCommandPalette));
        assert_eq!(map(&state, ctrl('x')), None);
    }

    #[test]
    fn test_chords_work_in_every_mode() {
        let mut state = AppState::default();
        state.mode = AppMode::TaskInput;
        assert_eq!(map(&state, ctrl('c')), Some(Action::Quit));
        assert_eq!(map(&state, ctrl('k')), Some(Action::ToggleCommandPalette));
        assert!(matches!(
            map(&state, press(KeyCode::Char('/'))),
            Some(Action::TaskInputKey(_))
        ));

        state.mode = AppMode::Help;
        assert_eq!(map(&state, ctrl('K')), Some(Action::ToggleCommandPalette));
    }

    #[test]
    fn test_release_is_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map(&state, Event::Key(key)), None);
    }

    #[test]
    fn test_error_swallows_shortcuts() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ErrorOccurred("offline".to_string()));
        assert_eq!(map(&state, press(KeyCode::Tab)), None);
        assert_eq!(map(&state, press(KeyCode::Enter)), Some(Action::CancelMode));
        assert_eq!(
            map(&state, press(KeyCode::Char('r'))),
            Some(Action::RefreshDashboard)
        );
    }

    #[test]
    fn test_palette_mouse() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::OpenCommandPalette);
        let layout = palette_layout(Rect::new(0, 0, SIZE.width, SIZE.height));
        let x = layout.list.x + 2;

        // First row is a group header
        assert_eq!(
            map(&state, mouse(MouseEventKind::Moved, x, layout.list.y)),
            None
        );
        assert_eq!(
            map(&state, mouse(MouseEventKind::Moved, x, layout.list.y + 2)),
            Some(Action::CommandPaletteHover(1))
        );
        assert_eq!(
            map(
                &state,
                mouse(MouseEventKind::Down(MouseButton::Left), x, layout.list.y + 1)
            ),
            Some(Action::CommandPaletteClick(0))
        );
        assert_eq!(
            map(&state, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            Some(Action::CloseCommandPalette)
        );
        assert_eq!(
            map(&state, mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(Action::CommandPaletteNext)
        );
    }

    #[test]
    fn test_click_focuses_checklist() {
        let mut state = AppState::default();
        let data = build_dashboard(Local::now()).unwrap();
        reducer::update(&mut state, Action::DashboardLoaded(Box::new(data)));

        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height), &state);
        let checklist = layout.panel(Panel::Checklist).unwrap();
        let click = mouse(
            MouseEventKind::Down(MouseButton::Left),
            checklist.x + 2,
            checklist.y + 2,
        );
        assert_eq!(map(&state, click), Some(Action::FocusChecklist));

        reducer::update(&mut state, Action::FocusChecklist);
        let scroll = mouse(MouseEventKind::ScrollDown, checklist.x + 2, checklist.y + 2);
        assert_eq!(map(&state, scroll), Some(Action::SelectNextTask));
    }
}
