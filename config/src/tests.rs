//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_degenerate_area_epsilon_is_positive() {
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
}

// =============================================================================
// PLANE DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_resolution_is_valid() {
    assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
}

#[test]
fn test_default_size_is_positive() {
    assert!(DEFAULT_SIZE > 0.0);
}

#[test]
fn test_min_resolution_is_one() {
    assert_eq!(MIN_RESOLUTION, 1);
}

// =============================================================================
// INDEX WIDTH TESTS
// =============================================================================

#[test]
fn test_wide_index_threshold_matches_host() {
    assert_eq!(WIDE_INDEX_RESOLUTION_THRESHOLD, 250);
}

#[test]
fn test_narrow_indices_fit_below_threshold() {
    // Every resolution at or below the threshold must address its vertices with u16.
    let side = WIDE_INDEX_RESOLUTION_THRESHOLD as usize + 1;
    assert!(side * side <= u16::MAX as usize + 1);
}

#[test]
fn test_default_resolution_uses_narrow_indices() {
    assert!(DEFAULT_RESOLUTION <= WIDE_INDEX_RESOLUTION_THRESHOLD);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_covers_wide_meshes() {
    let side = WIDE_INDEX_RESOLUTION_THRESHOLD as usize + 2;
    assert!(side * side < MAX_VERTICES);
}

#[test]
fn test_max_vertices_fits_u32_indices() {
    assert!(MAX_VERTICES <= u32::MAX as usize);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + 1e-11));
    assert!(!approx_equal(1.0, 1.001));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-3));
}
