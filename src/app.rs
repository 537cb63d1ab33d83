//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the loaded track, its
//! projection, the coloring mode and the hovered point.

mod model;

pub use model::*;
