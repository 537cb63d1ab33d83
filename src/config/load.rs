use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then applies environment
/// variables (prefix `TRACKVIEW__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKVIEW")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let c = &self.canvas;
        if c.margin < 0.0 {
            return Err("canvas.margin must be >= 0".to_string());
        }
        if c.width <= c.margin * 2.0 || c.height <= c.margin * 2.0 {
            return Err("canvas.width and canvas.height must exceed twice the margin".to_string());
        }
        if c.hover_radius <= 0.0 {
            return Err("canvas.hover_radius must be > 0".to_string());
        }
        if !(-23..=23).contains(&self.track.utc_offset_hours) {
            return Err("track.utc_offset_hours must be within -23..=23".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `TRACKVIEW_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKVIEW_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/trackview/config.toml`
/// or `~/.config/trackview/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("trackview").join("config.toml"))
}
