use crate::app::{
    action::Action,
    command::Command,
    config::AppConfig,
    features::data::{self, Services},
    input::map_event_to_action,
    reducer,
    state::AppState,
    timer::ProximityTimer,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

// Upper bound on how long the reader keeps running after the loop returns
const READER_POLL: Duration = Duration::from_millis(50);

pub async fn run_loop<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'a>,
    services: Services,
    config: &AppConfig,
) -> Result<AppState<'a>> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    let reader = spawn_event_reader(event_tx, poll_terminal);

    let result = run_loop_with_events(terminal, app_state, services, config, event_rx).await;

    // The receiver is gone, so the reader exits on its next poll
    if let Err(e) = reader.await {
        warn!(error = %e, "Terminal reader failed");
    }
    result
}

fn poll_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward terminal events until the receiving side closes. `next_event`
/// waits at most the given timeout and yields `None` when nothing arrived.
pub(crate) fn spawn_event_reader<F>(
    tx: mpsc::Sender<io::Result<Event>>,
    mut next_event: F,
) -> JoinHandle<()>
where
    F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match next_event(READER_POLL) {
                Ok(Some(evt)) => {
                    if tx.blocking_send(Ok(evt)).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = tx.blocking_send(Err(e));
                    break;
                }
            }
        }
        debug!("Terminal reader stopped");
    })
}

/// Drive the app until it quits, reading terminal events from `event_rx`.
/// Returns the final state.
pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    services: Services,
    config: &AppConfig,
    mut event_rx: mpsc::Receiver<io::Result<Event>>,
) -> Result<AppState<'a>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut ticker = interval(config.tick_rate());

    // Aborted when the loop returns
    let _proximity_timer = ProximityTimer::spawn(config.proximity_refresh(), action_tx.clone());

    // Initial Load
    app_state.is_loading = true;
    handle_command(Command::LoadDashboard, &services, action_tx.clone())?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state))?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = ticker.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        let Some(action) = action else {
            continue;
        };
        if !matches!(action, Action::Tick) {
            debug!(?action, "Dispatching");
        }

        let command = reducer::update(&mut app_state, action);

        if app_state.should_quit {
            info!("Quit requested");
            break;
        }

        if let Some(cmd) = command {
            handle_command(cmd, &services, action_tx.clone())?;
        }
    }

    Ok(app_state)
}

pub(crate) fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    data::handle_command(command, services, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
