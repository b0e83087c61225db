use crate::app::{action::Action, command::Command, persistence};
use crate::domain::source::DashboardSource;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Collaborators the runtime hands to command handlers.
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn DashboardSource>,
    // None disables persistence (no home directory)
    pub preferences_path: Option<PathBuf>,
}

pub fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::LoadDashboard => {
            let source = Arc::clone(&services.source);
            tokio::spawn(async move {
                match source.load_dashboard().await {
                    Ok(data) => {
                        info!(tasks = data.prep_tasks.len(), "Dashboard loaded");
                        let _ = tx.send(Action::DashboardLoaded(Box::new(data))).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::ErrorOccurred(format!(
                                "Failed to load dashboard: {e}"
                            )))
                            .await;
                    }
                }
            });
        }
        Command::SaveDashboardMode(mode) => {
            let Some(path) = &services.preferences_path else {
                return Ok(());
            };
            // Small synchronous write; a failure only costs the preference
            if let Err(e) = persistence::save_dashboard_mode(path, mode) {
                warn!(error = %e, "Could not save dashboard mode");
                let _ = tx.try_send(Action::Notify("Could not save preference".to_string()));
            }
        }
    }
    Ok(())
}
