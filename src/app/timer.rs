use crate::app::action::Action;
use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Periodically asks the reducer to re-classify the next session.
///
/// The background task lives exactly as long as this value; dropping it
/// aborts the task.
#[derive(Debug)]
pub struct ProximityTimer {
    handle: JoinHandle<()>,
}

impl ProximityTimer {
    /// The first tick fires one `period` from now.
    #[must_use]
    pub fn spawn(period: Duration, tx: mpsc::Sender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(Action::ProximityTick(Local::now())).await.is_err() {
                    debug!("Action channel closed, stopping proximity timer");
                    break;
                }
            }
        });
        Self { handle }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ProximityTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
