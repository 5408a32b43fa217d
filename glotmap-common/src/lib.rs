//! # Glotmap Common Library
//!
//! Shared code for the glotmap viewer:
//! - Error types
//! - Geometry primitives (positions, bounds)
//! - Dataset model (languages, concepts, forms, audio descriptors)
//! - Viewer configuration loading
//! - Outbound event types (ViewerEvent enum)

pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod geo;

pub use error::{Error, Result};
pub use geo::{Bounds, LatLng};
