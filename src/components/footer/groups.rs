use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};
use crate::domain::route::Route;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss"), FooterItem::new("r", "retry")],
        }];
    }

    if state.command_palette.is_open {
        return vec![FooterGroup {
            name: "COMMAND",
            items: vec![
                FooterItem::new("ENTER", "run"),
                FooterItem::new("↑/↓", "move"),
                FooterItem::new("Esc", "close"),
            ],
        }];
    }

    match state.mode {
        AppMode::Normal => {
            let mut groups = vec![FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem::new("Ctrl+K", "commands"),
                    FooterItem::new("Esc", "back").highlighted(state.route != Route::Dashboard),
                ],
            }];
            if state.route == Route::Dashboard {
                groups.push(FooterGroup {
                    name: "DASH",
                    items: vec![
                        FooterItem::new("Tab", "mode"),
                        FooterItem::new("c", "checklist"),
                        FooterItem::new("r", "reload"),
                    ],
                });
            }
            groups.push(FooterGroup {
                name: "APP",
                items: vec![FooterItem::new("?", "help"), FooterItem::new("Ctrl+C", "quit")],
            });
            groups
        }
        AppMode::Checklist => vec![
            FooterGroup {
                name: "PREP",
                items: vec![
                    FooterItem::new("↑/↓", "move"),
                    FooterItem::new("Space", "toggle"),
                    FooterItem::new("a", "add"),
                    FooterItem::new("Esc", "done"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![FooterItem::new("Ctrl+K", "commands")],
            },
        ],
        AppMode::TaskInput => vec![FooterGroup {
            name: "INPUT",
            items: vec![
                FooterItem::new("ENTER", "add task"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc/?", "close")],
        }],
    }
}
