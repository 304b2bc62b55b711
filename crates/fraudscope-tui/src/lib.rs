//! Terminal dashboard
//!
//! One loop on the UI thread: poll every mounted panel for finished
//! requests, redraw, then wait up to one tick for a key press.

use std::time::Duration;

use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use fraudscope_client::{ClientConfig, ClientError, FraudScopeClient};
use fraudscope_dashboard::{Dashboard, DashboardOptions};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use thiserror::Error;

pub mod input;
pub mod render;
pub mod theme;

pub use input::{handle_key, InputMode, KeyOutcome, UiState};

/// Redraw interval while idle
const TICK: Duration = Duration::from_millis(150);

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("client error: {0}")]
    Client(#[from] ClientError),
}

/// Run the dashboard until the user quits
pub async fn run_dashboard(
    config: ClientConfig,
    options: DashboardOptions,
) -> Result<(), TuiError> {
    let client = FraudScopeClient::with_config(config)?;
    let mut dashboard = Dashboard::new(client, options);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut dashboard).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
) -> Result<(), TuiError> {
    let mut ui = UiState::default();
    loop {
        dashboard.poll();
        ui.tick = ui.tick.wrapping_add(1);
        terminal.draw(|frame| render::draw_ui(frame, &*dashboard, &ui))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let CEvent::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(dashboard, &mut ui, key).await == KeyOutcome::Quit {
                tracing::info!("dashboard closed");
                return Ok(());
            }
        }
    }
}
