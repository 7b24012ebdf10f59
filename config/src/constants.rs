//! # Configuration Constants
//!
//! Centralized constants for plane mesh generation. Defaults, index-width
//! policy, safety limits and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Plane Defaults**: Resolution and size used when nothing is configured
//! - **Index Width**: Threshold for switching to 32-bit indices
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area (doubled cross product length) below which a
/// triangle is treated as degenerate during validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// PLANE DEFAULTS
// =============================================================================

/// Default number of grid subdivisions per axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let user_resolution: Option<u32> = None;
/// assert_eq!(user_resolution.unwrap_or(DEFAULT_RESOLUTION), 100);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 100;

/// Default world-space edge length of the plane.
pub const DEFAULT_SIZE: f64 = 10.0;

/// Smallest accepted resolution. Zero subdivisions would produce no cells.
pub const MIN_RESOLUTION: u32 = 1;

// =============================================================================
// INDEX WIDTH
// =============================================================================

/// Resolutions strictly above this value use 32-bit indices.
///
/// This is a fixed capacity policy rather than the exact vertex-count bound:
/// `(250 + 1)^2 = 63001` already fits in 16 bits, and so would a few larger
/// resolutions, but consumers depend on the switchover happening at 251.
///
/// # Example
///
/// ```rust
/// use config::constants::WIDE_INDEX_RESOLUTION_THRESHOLD;
///
/// assert!(250 <= WIDE_INDEX_RESOLUTION_THRESHOLD);
/// assert!(251 > WIDE_INDEX_RESOLUTION_THRESHOLD);
/// ```
pub const WIDE_INDEX_RESOLUTION_THRESHOLD: u32 = 250;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1001 * 1001;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
