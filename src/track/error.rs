use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort loading a GPX file.
#[derive(Debug, Error)]
pub enum GpxError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GPX parse error: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("invalid timestamp {0:?} (expected YYYY-MM-DDTHH:MM:SSZ)")]
    InvalidTimestamp(String),
}
