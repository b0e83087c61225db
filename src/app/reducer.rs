use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

// The palette runs first so its keys never leak into dashboard handlers.
const FEATURES: [Feature; 5] = [
    features::palette::update,
    features::navigation::update,
    features::dashboard::update,
    features::checklist::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::trace!(?action, "Unhandled action");
    None
}
