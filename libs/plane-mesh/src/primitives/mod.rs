//! # Primitives
//!
//! Procedural mesh generation for primitive shapes.

pub mod plane;

pub use plane::{create_plane, validate_plane_parameters};
