//! Track module: GPX loading, point model and derived statistics.
//!
//! A `Track` is parsed once at startup; its aggregates and projection are
//! read-only for the rest of the session.

mod color;
mod error;
mod gpx;
mod model;
mod projection;
mod stats;

pub use color::*;
pub use gpx::load_track;
pub use model::*;
pub use projection::{PlotPoint, plot_points};

// Only tests name these directly; the app reaches them through `Track`.
#[cfg(test)]
pub use {
    error::GpxError,
    gpx::parse_gpx_str,
    stats::{SessionDuration, TrackStats},
};
