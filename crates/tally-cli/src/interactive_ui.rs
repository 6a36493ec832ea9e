use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use tally_term::application::ui::{destruct_terminal_for_panic, start_loop};
use tally_term::configuration::Config;
use tally_term::domain::services::AppStateProps;

/// Take over the terminal and run the calculator until the user quits
pub async fn start_interactive_ui(tick_rate: Duration, track_focus: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let app_state_props = AppStateProps { track_focus };
    let result = start_loop(&mut terminal, app_state_props, tick_rate).await;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

/// Install the panic hook and start the UI with the loaded configuration
pub async fn run_interactive_ui() -> Result<()> {
    let tick_rate = Config::tick_rate()?;
    let track_focus = Config::track_focus();

    // Restore the terminal before the panic message is printed.
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    log::info!("starting interactive session");
    let result = start_interactive_ui(tick_rate, track_focus).await;
    log::info!("interactive session ended");

    result
}
