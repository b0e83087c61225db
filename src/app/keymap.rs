use super::action::Action;
use super::state::AppMode;
use crate::domain::mode::DashboardMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Reserved chords, honoured in every mode including text entry
    pub chords: HashMap<KeyEvent, Action>,
    pub global: HashMap<KeyEvent, Action>,
    pub checklist: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut chords = HashMap::new();
        let mut global = HashMap::new();
        let mut checklist = HashMap::new();

        // --- Chords ---
        chords.insert(ctrl('k'), Action::ToggleCommandPalette);
        chords.insert(ctrl('c'), Action::Quit);

        // --- Dashboard ---
        global.insert(key(KeyCode::Char('/')), Action::OpenCommandPalette);
        global.insert(key(KeyCode::Tab), Action::CycleDashboardMode);
        global.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(key(KeyCode::Char('c')), Action::FocusChecklist);
        global.insert(key(KeyCode::Char('r')), Action::RefreshDashboard);
        global.insert(key(KeyCode::Esc), Action::CancelMode);
        for (digit, mode) in ('1'..='4').zip(DashboardMode::all()) {
            global.insert(key(KeyCode::Char(digit)), Action::SetDashboardMode(*mode));
        }

        // --- Checklist ---
        checklist.insert(key(KeyCode::Down), Action::SelectNextTask);
        checklist.insert(key(KeyCode::Up), Action::SelectPrevTask);
        checklist.insert(key(KeyCode::Char(' ')), Action::ToggleSelectedTask);
        checklist.insert(key(KeyCode::Enter), Action::ToggleSelectedTask);
        checklist.insert(key(KeyCode::Char('a')), Action::AddTaskIntent);
        checklist.insert(key(KeyCode::Esc), Action::CancelMode);

        if config.profile == "vim" {
            global.insert(key(KeyCode::Char('q')), Action::Quit);
            checklist.insert(key(KeyCode::Char('j')), Action::SelectNextTask);
            checklist.insert(key(KeyCode::Char('k')), Action::SelectPrevTask);
        }

        Self {
            chords,
            global,
            checklist,
        }
    }

    #[must_use]
    pub fn chord(&self, event: KeyEvent) -> Option<Action> {
        self.chords.get(&normalize(event)).cloned()
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = normalize(event);
        if let Some(action) = self.chords.get(&event) {
            return Some(action.clone());
        }
        if mode == AppMode::Checklist {
            if let Some(action) = self.checklist.get(&event) {
                return Some(action.clone());
            }
        }
        self.global.get(&event).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Terminals disagree on whether shifted characters carry `SHIFT` and on
/// the case of control chords; fold both away before lookup.
fn normalize(event: KeyEvent) -> KeyEvent {
    match event.code {
        KeyCode::Char(c) => {
            let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
            let c = if modifiers.contains(KeyModifiers::CONTROL) {
                c.to_ascii_lowercase()
            } else {
                c
            };
            KeyEvent::new(KeyCode::Char(c), modifiers)
        }
        code => KeyEvent::new(code, event.modifiers),
    }
}
