use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_palette::CommandPaletteModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::task_input::TaskInputModal;

/// Draws every overlay in stacking order: help, task entry, error, palette.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;
        let is_modal_active = matches!(state.mode, AppMode::Help | AppMode::TaskInput)
            || state.command_palette.is_open
            || state.last_error.is_some();

        if is_modal_active {
            dim_area(buf, area);
        }

        match state.mode {
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::TaskInput => {
                if let Some(draft) = &state.task_draft {
                    TaskInputModal {
                        theme: self.theme,
                        draft,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Normal | AppMode::Checklist => {}
        }

        if let Some(err) = &state.last_error {
            ErrorModal {
                theme: self.theme,
                error: err,
            }
            .render(area, buf);
        }

        if state.command_palette.is_open {
            CommandPaletteModal {
                theme: self.theme,
                state: &state.command_palette,
                registry: &state.commands,
            }
            .render(area, buf);
        }
    }
}
