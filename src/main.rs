mod app;
mod events;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use dialkit::config::{Config, ProgressShape};
use dialkit::log;

use app::{App, SavedSession};
use events::EventHandler;

const USAGE: &str = "\
Usage: dialkit [OPTIONS]

Options:
  --square               Draw the progress track as a rounded rectangle
  --circular             Draw the progress track as a circle
  --no-repeat            Stop pickers at their first and last option
  --touch-exploration    Send all scrolling to the active picker
  --fresh                Ignore saved picker state
  -h, --help             Print this help
";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let mut shape = None;
    let mut repeat_items = None;
    let mut touch_exploration = None;
    let mut fresh = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--square" => shape = Some(ProgressShape::Square),
            "--circular" => shape = Some(ProgressShape::Circular),
            "--no-repeat" => repeat_items = Some(false),
            "--touch-exploration" => touch_exploration = Some(true),
            "--fresh" => fresh = true,
            "--help" | "-h" => {
                print!("{}", USAGE);
                return Ok(());
            }
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
    }

    // Precedence: CLI > env var > config file > default
    let config = Config::load()
        .with_env()
        .with_overrides(shape, repeat_items, touch_exploration);
    let frame = config.picker.animation_frame().max(Duration::from_millis(1));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rows = terminal.size()?.height;
    let result = match App::new(config, rows) {
        Ok(mut app) => {
            if !fresh {
                restore_session(&mut app, rows);
            }
            let result = run_app(&mut terminal, &mut app, frame).await;
            save_session(&app);
            result
        }
        Err(e) => Err(e.into()),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, frame: Duration) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(frame);

    loop {
        terminal.draw(|f| tui::ui::render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if let Err(e) = app.dispatch(action).await {
                            log::log(&format!("Action {:?} failed: {}", action, e));
                            app.status = e.to_string();
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            _ = tick.tick() => {
                if let Err(e) = app.on_tick() {
                    log::log(&format!("Tick failed: {}", e));
                    app.status = e.to_string();
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Load picker state saved by a previous run, if any
fn restore_session(app: &mut App, rows: u16) {
    let path = Config::state_path();
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return,
    };

    let restored = serde_json::from_str::<SavedSession>(&contents)
        .map_err(|e| e.to_string())
        .and_then(|session| app.restore(session, rows).map_err(|e| e.to_string()));

    match restored {
        Ok(()) => log::log(&format!("Restored picker state from {}", path.display())),
        Err(e) => log::log(&format!("Warning: Ignoring saved picker state: {}", e)),
    }
}

fn save_session(app: &App) {
    let path = Config::state_path();
    let write = || -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&app.save())?)?;
        Ok(())
    };

    if let Err(e) = write() {
        log::log(&format!("Warning: Failed to save picker state: {}", e));
    }
}
