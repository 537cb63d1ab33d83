//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the viewer (which file to
//! open, canvas geometry, logging) and helpers to load them from disk.

mod load;
mod schema;

pub use schema::*;
