use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::track::{ColorMode, load_track};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    let log_path = logging::init(&settings.log);
    if let Some(reason) = fallback {
        tracing::warn!(%reason, "using default settings");
    }

    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.track.path.clone());
    tracing::info!(path = %path.display(), log = ?log_path, "starting trackview");

    // Load failures are fatal before the terminal is touched.
    let track = load_track(&path, settings.track.utc_offset()).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to load track");
    })?;
    if track.is_empty() {
        tracing::error!(path = %path.display(), "track has no points");
        return Err(format!("{}: no track points found", path.display()).into());
    }

    let mut app = App::new(track, path, settings.canvas.clone());
    if !settings.ui.start_in_speed_mode {
        app.mode = ColorMode::HeartRate;
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");
    run_result
}
