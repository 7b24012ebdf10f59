//! # Config Crate
//!
//! Centralized configuration constants for plane mesh generation.
//! All magic numbers and tunable parameters are defined here so the mesh
//! crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RESOLUTION, WIDE_INDEX_RESOLUTION_THRESHOLD};
//!
//! let resolution = DEFAULT_RESOLUTION;
//! let wide = resolution > WIDE_INDEX_RESOLUTION_THRESHOLD;
//! assert!(!wide);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults and thresholds match the existing plane component
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
