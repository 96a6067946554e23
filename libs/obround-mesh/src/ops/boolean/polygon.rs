//! # Polygon for BSP Operations
//!
//! Convex planar polygon. Fragments produced by splitting keep the plane of
//! the polygon they came from, so sliver pieces never re-derive a noisy
//! normal from nearly collinear points.

use super::plane::{Plane, Side};
use glam::DVec3;

/// A convex polygon with its supporting plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front
    vertices: Vec<DVec3>,
    plane: Plane,
}

/// Output buckets for [`Polygon::split`].
#[derive(Debug, Default)]
pub struct SplitResult {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Creates a polygon, deriving the plane from the first three vertices.
    ///
    /// Returns `None` for fewer than three vertices or collinear leading
    /// vertices.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Polygon vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Supporting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding and plane orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Sorts this polygon into the buckets of `result` relative to `plane`,
    /// cutting it in two when it spans the plane.
    pub fn split(self, plane: &Plane, result: &mut SplitResult) {
        let sides: Vec<Side> = self
            .vertices
            .iter()
            .map(|v| plane.classify_point(*v))
            .collect();
        let polygon_side = sides.iter().fold(Side::COPLANAR, |acc, s| acc.or(*s));

        match polygon_side {
            Side::COPLANAR => {
                if plane.normal().dot(self.plane.normal()) > 0.0 {
                    result.coplanar_front.push(self);
                } else {
                    result.coplanar_back.push(self);
                }
            }
            Side::FRONT => result.front.push(self),
            Side::BACK => result.back.push(self),
            _ => {
                let n = self.vertices.len();
                let mut front = Vec::with_capacity(n + 1);
                let mut back = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let j = (i + 1) % n;
                    let (si, sj) = (sides[i], sides[j]);
                    let (vi, vj) = (self.vertices[i], self.vertices[j]);

                    if si != Side::BACK {
                        front.push(vi);
                    }
                    if si != Side::FRONT {
                        back.push(vi);
                    }
                    if si.or(sj) == Side::SPANNING {
                        let t = (plane.w() - plane.normal().dot(vi)) / plane.normal().dot(vj - vi);
                        let crossing = vi.lerp(vj, t);
                        front.push(crossing);
                        back.push(crossing);
                    }
                }

                if front.len() >= 3 {
                    result.front.push(Polygon {
                        vertices: front,
                        plane: self.plane,
                    });
                }
                if back.len() >= 3 {
                    result.back.push(Polygon {
                        vertices: back,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
