use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};

use dmforge::app::{
    config::AppConfig, features::data::Services, persistence, r#loop::run_loop, state::AppState,
};
use dmforge::infrastructure::sample_dashboard::SampleDashboardSource;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    let _log_guard = dmforge::logging::init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "Starting dmforge");

    // Everything that can fail on bad files happens before raw mode
    let config = AppConfig::load();
    let preferences_path = match persistence::preferences_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "Preferences disabled");
            None
        }
    };
    let dashboard_mode = preferences_path
        .as_deref()
        .map(persistence::load_dashboard_mode)
        .unwrap_or_default();

    let app_state = AppState::new(&config, dashboard_mode);
    let services = Services {
        source: Arc::new(SampleDashboardSource::new()),
        preferences_path,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}
