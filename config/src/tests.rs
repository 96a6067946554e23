//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;
use std::f64::consts::PI;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_plane_epsilon_below_feature_sizes() {
    assert!(PLANE_EPSILON > EPSILON);
    assert!(PLANE_EPSILON < DEFAULT_EMBED / 100.0);
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// DESIGN DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_design_is_an_obround() {
    assert!(DEFAULT_OUTER_OVERALL > DEFAULT_OUTER_DIAMETER);
    assert!(DEFAULT_OUTER_DIAMETER - 2.0 * DEFAULT_WALL > 0.0);
}

#[test]
fn test_default_embed_smaller_than_pad() {
    assert!(DEFAULT_EMBED < DEFAULT_PAD_HEIGHT);
}

#[test]
fn test_default_pads_form_a_chain() {
    assert!(DEFAULT_PADS_PER_GROUP >= 2);
}

#[test]
fn test_default_file_names_differ() {
    assert_ne!(DEFAULT_TUBE_FILE_NAME, DEFAULT_FLUID_FILE_NAME);
    assert!(DEFAULT_TUBE_FILE_NAME.ends_with(".stl"));
    assert!(DEFAULT_FLUID_FILE_NAME.ends_with(".stl"));
}

// =============================================================================
// COMPUTE_ARC_SEGMENTS TESTS
// =============================================================================

#[test]
fn test_arc_segments_angular_limit() {
    // Loose chord tolerance: only the angle matters
    // ceil(PI / 0.5) = 7
    let segments = compute_arc_segments(1.0, PI, 0.5, 0.5);
    assert_eq!(segments, 7);
}

#[test]
fn test_arc_segments_linear_limit() {
    // Loose angle tolerance: sagitta of each segment must stay below 0.01
    let radius = 10.0;
    let tolerance = 0.01;
    let segments = compute_arc_segments(radius, PI, tolerance, PI);
    let step = PI / f64::from(segments);
    let sagitta = radius * (1.0 - (step / 2.0).cos());
    assert!(sagitta <= tolerance + EPSILON);
}

#[test]
fn test_arc_segments_minimum() {
    assert_eq!(compute_arc_segments(0.0, PI, 0.05, 0.1), MIN_ARC_SEGMENTS);
    assert_eq!(compute_arc_segments(5.0, 0.0, 0.05, 0.1), MIN_ARC_SEGMENTS);
    assert_eq!(compute_arc_segments(0.1, PI, 1.0, 10.0), MIN_ARC_SEGMENTS);
}

#[test]
fn test_arc_segments_maximum() {
    assert_eq!(compute_arc_segments(100.0, PI, 1e-9, 1e-9), MAX_ARC_SEGMENTS);
}

#[test]
fn test_arc_segments_default_tolerances() {
    let segments = compute_arc_segments(
        DEFAULT_OUTER_DIAMETER / 2.0,
        PI,
        DEFAULT_LINEAR_TOLERANCE,
        DEFAULT_ANGULAR_TOLERANCE,
    );
    assert_eq!(segments, 32);
}

// =============================================================================
// COMPARISON HELPER TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-12));
    assert!(!approx_zero(1e-6));
}
