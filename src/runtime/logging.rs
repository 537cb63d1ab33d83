use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogSettings;

/// Install a file-backed `tracing` subscriber. The terminal belongs to the UI,
/// so nothing is written to stdout/stderr once the loop starts.
///
/// Returns the log path on success; failures are reported and otherwise ignored.
pub fn init(settings: &LogSettings) -> Option<PathBuf> {
    let path = settings.resolved_file();
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("trackview: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter.as_str()));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init();

    match installed {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("trackview: logging disabled: {e}");
            None
        }
    }
}
