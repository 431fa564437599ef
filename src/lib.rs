//! Overpass prediction logic lives here.
//!
//! The estimator is split across small focused crates; this facade re-exports
//! them under stable module paths so multiple front-ends (CLI, services,
//! tests) can share a single dependency.

pub use overpass_core::{constants, time, vector};

pub use overpass_config as config;
pub use overpass_export as export;
pub use overpass_geodesy as geodesy;
pub use overpass_intercept as intercept;
pub use overpass_track as track;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
