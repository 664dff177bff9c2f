//! Survey area perimeter.

use serde::{Deserialize, Serialize};

use super::point::Point2D;
use crate::error::{PlanError, Result};

/// Minimum number of vertices for a closed area
pub const MIN_VERTICES: usize = 3;

/// Closed polygon outline. The last vertex connects back to the first.
///
/// Simplicity (no self-intersection) is not checked; growth ceilings in the
/// planner are the only guard against malformed outlines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct Perimeter {
    vertices: Vec<Point2D>,
}

impl Perimeter {
    /// Create a perimeter, rejecting fewer than 3 or non-finite vertices
    pub fn new(vertices: Vec<Point2D>) -> Result<Self> {
        if vertices.len() < MIN_VERTICES {
            return Err(PlanError::InvalidInput(format!(
                "perimeter needs at least {} points, got {}",
                MIN_VERTICES,
                vertices.len()
            )));
        }
        if let Some(i) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(PlanError::InvalidInput(format!(
                "perimeter vertex {} is not finite",
                i
            )));
        }
        Ok(Self { vertices })
    }

    /// Build from `(lat, lon)` pairs in degrees
    pub fn from_lat_lon(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(lat, lon)| Point2D::from_lat_lon(lat, lon))
                .collect(),
        )
    }

    /// Vertices in order
    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed perimeter
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as consecutive vertex pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices.
    ///
    /// This is the flood-fill seed. It is not the area centroid and can sit
    /// off-centre for unevenly sampled outlines.
    pub fn vertex_mean(&self) -> Point2D {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2D::new(sx / n, sy / n)
    }

    /// Axis-aligned bounding box as (min, max)
    pub fn bounding_box(&self) -> (Point2D, Point2D) {
        let first = self.vertices[0];
        self.vertices
            .iter()
            .fold((first, first), |(min, max), p| {
                (
                    Point2D::new(min.x.min(p.x), min.y.min(p.y)),
                    Point2D::new(max.x.max(p.x), max.y.max(p.y)),
                )
            })
    }
}

impl TryFrom<Vec<Point2D>> for Perimeter {
    type Error = PlanError;

    fn try_from(vertices: Vec<Point2D>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Perimeter> for Vec<Point2D> {
    fn from(perimeter: Perimeter) -> Self {
        perimeter.vertices
    }
}
