//! # Configuration Constants
//!
//! Centralized constants for the turbulator tube pipeline. Precision values,
//! tessellation tolerances and the default tube design are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Default facet tolerances and arc segment limits
//! - **Design**: Default tube and turbulator dimensions
//! - **Output**: Default file names

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

/// Distance below which a point counts as lying on a BSP splitting plane.
///
/// Large enough to absorb the rounding noise of repeated polygon splits,
/// small enough to stay far below any feature of a tube (wall 0.6 mm,
/// embed 0.15 mm).
pub const PLANE_EPSILON: f64 = 1e-5;

/// Epsilon for vertex welding during mesh cleanup.
///
/// Vertices closer than this (per axis, after grid quantisation) are merged.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// let key = |v: f64| (v / VERTEX_MERGE_EPSILON).round() as i64;
/// assert_eq!(key(1.0), key(1.0 + 1e-9));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-6;

/// Triangles with an area below this are considered degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// Minimum |tan(angle)| for a diagonal turbulator chain.
///
/// A flatter angle cannot step across the wall width.
pub const ANGLE_EPSILON: f64 = 1e-6;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default linear deflection for exported meshes (mm).
///
/// Maximum distance between a true arc and its facet chord.
pub const DEFAULT_LINEAR_TOLERANCE: f64 = 0.05;

/// Default angular deflection for exported meshes (radians).
///
/// Maximum angle subtended by one facet of a curved surface.
pub const DEFAULT_ANGULAR_TOLERANCE: f64 = 0.1;

/// Minimum number of segments for any arc.
pub const MIN_ARC_SEGMENTS: u32 = 2;

/// Maximum number of segments for any arc.
///
/// Safety limit against tolerances so small that the Boolean stage would
/// drown in polygons.
pub const MAX_ARC_SEGMENTS: u32 = 512;

// =============================================================================
// DESIGN CONSTANTS
// =============================================================================

/// Default tube length along Z (mm).
pub const DEFAULT_LENGTH: f64 = 120.0;

/// Default overall obround width in X, end to end (mm).
pub const DEFAULT_OUTER_OVERALL: f64 = 24.0;

/// Default obround height in Y, which is also the end-cap diameter (mm).
pub const DEFAULT_OUTER_DIAMETER: f64 = 8.0;

/// Default wall thickness (mm).
pub const DEFAULT_WALL: f64 = 0.6;

/// Default axial spacing between turbulator groups (mm).
pub const DEFAULT_GROUP_SPACING: f64 = 10.0;

/// Default diagonal angle in degrees (dx/dz = tan(angle)).
pub const DEFAULT_ANGLE_DEG: f64 = 35.0;

/// Default number of pads per diagonal group.
pub const DEFAULT_PADS_PER_GROUP: usize = 4;

/// Default square pad footprint in X and Z (mm).
pub const DEFAULT_PAD_SIZE: f64 = 1.3;

/// Default pad extent along Y (mm).
pub const DEFAULT_PAD_HEIGHT: f64 = 0.7;

/// Default depth a pad sinks into the wall (mm).
pub const DEFAULT_EMBED: f64 = 0.15;

/// Default fraction of the usable flat span covered by one chain.
pub const DEFAULT_FLAT_WIDTH_COVERAGE: f64 = 0.85;

/// Default keep-out distance from each tube end (mm).
pub const DEFAULT_END_MARGIN: f64 = 5.0;

/// Upper bound on the number of groups scheduled on one wall.
///
/// A tube needing more is almost certainly a unit mistake in
/// `group_spacing`.
pub const MAX_GROUPS_PER_WALL: usize = 100_000;

/// Lower bound of the lateral keep-out from the rounded ends (mm).
///
/// The actual margin is `max(pad_size / 2, MIN_EDGE_MARGIN)`.
pub const MIN_EDGE_MARGIN: f64 = 0.3;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Default file name of the metal (tube + turbulators) mesh.
pub const DEFAULT_TUBE_FILE_NAME: &str = "radiator_tube_with_turbulators.stl";

/// Default file name of the fluid-domain mesh.
pub const DEFAULT_FLUID_FILE_NAME: &str = "radiator_tube_fluid.stl";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of straight segments used to approximate an arc.
///
/// Both tolerances must hold:
/// - the sagitta `r * (1 - cos(theta / 2))` of each segment stays within
///   `linear_tolerance`
/// - each segment subtends at most `angular_tolerance`
///
/// The result is clamped to `MIN_ARC_SEGMENTS..=MAX_ARC_SEGMENTS`.
///
/// # Arguments
///
/// * `radius` - Arc radius
/// * `sweep` - Swept angle in radians
/// * `linear_tolerance` - Maximum chord deviation
/// * `angular_tolerance` - Maximum angle per segment in radians
///
/// # Example
///
/// ```rust
/// use config::constants::compute_arc_segments;
/// use std::f64::consts::PI;
///
/// // The angular limit dominates for small arcs: ceil(PI / 0.1) = 32
/// assert_eq!(compute_arc_segments(4.0, PI, 0.05, 0.1), 32);
/// ```
pub fn compute_arc_segments(
    radius: f64,
    sweep: f64,
    linear_tolerance: f64,
    angular_tolerance: f64,
) -> u32 {
    let sweep = sweep.abs();
    if radius <= EPSILON || sweep <= EPSILON {
        return MIN_ARC_SEGMENTS;
    }

    let from_angle = if angular_tolerance > EPSILON {
        sweep / angular_tolerance
    } else {
        f64::from(MAX_ARC_SEGMENTS)
    };

    let from_chord = if linear_tolerance > EPSILON && linear_tolerance < radius {
        let max_step = 2.0 * (1.0 - linear_tolerance / radius).acos();
        sweep / max_step
    } else {
        // Tolerance at least as large as the radius: any chord is acceptable
        0.0
    };

    let segments = from_angle.max(from_chord).ceil();
    if segments >= f64::from(MAX_ARC_SEGMENTS) {
        MAX_ARC_SEGMENTS
    } else {
        (segments as u32).max(MIN_ARC_SEGMENTS)
    }
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
