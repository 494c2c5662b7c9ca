//! Trellis UI - workbench for the Trellis navigator widgets
//!
//! Binary entry point for the TUI application.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use trellis_ui::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let terminal = ratatui::init();
    let result = run(terminal);
    ratatui::restore();
    result
}

/// Route tracing output to stderr when `TRELLIS_UI_LOG` is set.
///
/// The cell's layout pass reports skipped passes through `tracing`;
/// redirecting stderr to a file captures them without disturbing the
/// terminal UI.
fn init_tracing() {
    if std::env::var_os("TRELLIS_UI_LOG").is_none() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_env("TRELLIS_UI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
    let mut app = App::new();

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.on_key_event(key);
        }
        _ => {}
    }
    Ok(())
}
