//! # 2D Profiles
//!
//! Closed convex outlines in the XY plane, ready for [`linear_extrude`].
//!
//! [`linear_extrude`]: crate::ops::extrude::linear_extrude

use std::f64::consts::PI;

use config::constants::{approx_zero, EPSILON};
use glam::DVec2;

use crate::error::MeshError;
use crate::tessellation::Tessellation;

/// A closed 2D polygon, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile2D {
    /// Outline vertices in counter-clockwise order
    outline: Vec<DVec2>,
}

impl Profile2D {
    /// Creates a profile from outline vertices.
    ///
    /// # Arguments
    ///
    /// * `outline` - Vertices in counter-clockwise order
    ///
    /// # Example
    ///
    /// ```rust
    /// use obround_mesh::Profile2D;
    /// use glam::DVec2;
    ///
    /// let square = Profile2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(square.area(), 1.0);
    /// ```
    pub fn new(outline: Vec<DVec2>) -> Self {
        Self { outline }
    }

    /// Creates an obround ("slot"): a rectangle with semicircular caps on
    /// the ±X ends, centred at the origin.
    ///
    /// # Arguments
    ///
    /// * `overall_width` - End-to-end extent along X
    /// * `height` - Extent along Y, which is also the cap diameter
    /// * `tessellation` - Facet tolerances for the caps
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateGeometry`] unless
    /// `overall_width > height > 0`; an obround without straight flats is a
    /// circle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use obround_mesh::{Profile2D, Tessellation};
    ///
    /// let slot = Profile2D::obround(24.0, 8.0, &Tessellation::default())?;
    /// let (min, max) = slot.bounds();
    /// assert_eq!(max.x - min.x, 24.0);
    /// # Ok::<(), obround_mesh::MeshError>(())
    /// ```
    pub fn obround(
        overall_width: f64,
        height: f64,
        tessellation: &Tessellation,
    ) -> Result<Self, MeshError> {
        if !(height.is_finite() && height > EPSILON) {
            return Err(MeshError::degenerate(format!(
                "obround height must be positive, got {height}"
            )));
        }
        if !overall_width.is_finite() || overall_width - height <= EPSILON {
            return Err(MeshError::degenerate(format!(
                "obround width {overall_width} must exceed its height {height}"
            )));
        }

        let radius = height / 2.0;
        let half_flat = (overall_width - height) / 2.0;
        let segments = tessellation.arc_segments(radius, PI);

        let mut outline = Vec::with_capacity(2 * (segments as usize + 1));

        // Right cap, bottom to top
        for i in 0..=segments {
            let theta = -PI / 2.0 + PI * f64::from(i) / f64::from(segments);
            outline.push(DVec2::new(half_flat + radius * theta.cos(), radius * theta.sin()));
        }
        // Left cap, top to bottom
        for i in 0..=segments {
            let theta = PI / 2.0 + PI * f64::from(i) / f64::from(segments);
            outline.push(DVec2::new(-half_flat + radius * theta.cos(), radius * theta.sin()));
        }

        Ok(Self { outline })
    }

    /// Returns the outline vertices.
    #[inline]
    pub fn outline(&self) -> &[DVec2] {
        &self.outline
    }

    /// Returns the number of outline vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.outline.len()
    }

    /// Signed area (shoelace formula); positive for counter-clockwise.
    pub fn area(&self) -> f64 {
        let n = self.outline.len();
        if n < 3 {
            return 0.0;
        }

        (0..n)
            .map(|i| self.outline[i].perp_dot(self.outline[(i + 1) % n]))
            .sum::<f64>()
            / 2.0
    }

    /// Returns true if every turn is a left turn (collinear runs allowed).
    pub fn is_convex(&self) -> bool {
        let n = self.outline.len();
        if n < 3 || approx_zero(self.area()) {
            return false;
        }

        (0..n).all(|i| {
            let a = self.outline[i];
            let b = self.outline[(i + 1) % n];
            let c = self.outline[(i + 2) % n];
            (b - a).perp_dot(c - b) >= -EPSILON
        })
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let Some(first) = self.outline.first() else {
            return (DVec2::ZERO, DVec2::ZERO);
        };

        self.outline
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }
}
