//! # Plane for BSP Operations
//!
//! Oriented plane with epsilon-tolerant point classification.

use config::constants::{DEGENERATE_AREA_EPSILON, PLANE_EPSILON};
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Side of a plane, stored as bit flags so a polygon's vertex sides can be
/// OR-ed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side(u8);

impl Side {
    /// Within `PLANE_EPSILON` of the plane.
    pub const COPLANAR: Side = Side(0);
    /// Positive side.
    pub const FRONT: Side = Side(1);
    /// Negative side.
    pub const BACK: Side = Side(2);
    /// Vertices on both sides.
    pub const SPANNING: Side = Side(3);

    /// Combines two classifications.
    #[inline]
    pub fn or(self, other: Side) -> Side {
        Side(self.0 | other.0)
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal · p = w` with unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane through three points, counter-clockwise seen from
    /// the front.
    ///
    /// Returns `None` when the points are collinear.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        let length = cross.length();
        if !(length > DEGENERATE_AREA_EPSILON) {
            return None;
        }

        let normal = cross / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Distance of the plane from the origin along the normal.
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Reverses the orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance; positive in front.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point.
    pub fn classify_point(&self, point: DVec3) -> Side {
        let distance = self.signed_distance(point);
        if distance < -PLANE_EPSILON {
            Side::BACK
        } else if distance > PLANE_EPSILON {
            Side::FRONT
        } else {
            Side::COPLANAR
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(plane.normal(), DVec3::Z);
        assert_eq!(plane.w(), 0.0);
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(plane.classify_point(DVec3::Z), Side::FRONT);
        assert_eq!(plane.classify_point(-DVec3::Z), Side::BACK);
        assert_eq!(plane.classify_point(DVec3::new(3.0, 4.0, 1e-7)), Side::COPLANAR);
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = Plane::from_points(DVec3::Z, DVec3::Z + DVec3::X, DVec3::Z + DVec3::Y).unwrap();
        plane.flip();
        assert_eq!(plane.normal(), -DVec3::Z);
        assert_eq!(plane.w(), -1.0);
        assert_eq!(plane.classify_point(DVec3::ZERO), Side::FRONT);
    }

    #[test]
    fn test_side_or() {
        assert_eq!(Side::FRONT.or(Side::BACK), Side::SPANNING);
        assert_eq!(Side::COPLANAR.or(Side::FRONT), Side::FRONT);
    }
}
