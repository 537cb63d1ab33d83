use crate::config::Settings;

/// Load and validate settings. Config is optional: on any failure the defaults
/// are returned together with the reason, to be logged once logging is up.
pub fn load_settings() -> (Settings, Option<String>) {
    settle(Settings::load())
}

fn settle(loaded: Result<Settings, ::config::ConfigError>) -> (Settings, Option<String>) {
    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (Settings::default(), Some(format!("invalid config: {msg}"))),
        },
        Err(e) => (Settings::default(), Some(format!("failed to load config: {e}"))),
    }
}
