use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackview/config.toml` or `~/.config/trackview/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKVIEW__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub track: TrackSettings,
    pub canvas: CanvasSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackSettings {
    /// GPX file opened when no path is given on the command line.
    pub path: PathBuf,
    /// Fixed offset (hours east of UTC) applied to every timestamp.
    /// No daylight-saving adjustment is made.
    pub utc_offset_hours: i32,
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("test.gpx"),
            utc_offset_hours: -5,
        }
    }
}

impl TrackSettings {
    /// The configured offset, or UTC when it is out of range.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}

/// Geometry of the virtual pixel canvas the track is projected into.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
    /// Blank border kept around the track on every side (pixels).
    pub margin: f64,
    /// A point counts as hovered when the cursor is closer than this (pixels).
    pub hover_radius: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 20.0,
            hover_radius: 8.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Start in speed coloring; `false` starts in heart-rate mode.
    pub start_in_speed_mode: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_in_speed_mode: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file path. Defaults to `trackview.log` in the system temp dir.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

impl LogSettings {
    pub fn resolved_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("trackview.log"))
    }
}
