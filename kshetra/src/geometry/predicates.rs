//! Segment and polygon tests against a cell.

use crate::core::{Cell, Perimeter, Point2D};

/// True if segments `p0-p1` and `q0-q1` cross at a point strictly interior
/// to both.
///
/// Uses the parametric form `p0 + t·r = q0 + u·s`. Parallel and collinear
/// segments (zero determinant) never count as crossing, so a perimeter edge
/// lying exactly on a cell boundary is not detected.
#[inline]
pub fn segments_cross(p0: Point2D, p1: Point2D, q0: Point2D, q1: Point2D) -> bool {
    let r = p1 - p0;
    let s = q1 - q0;
    let denom = r.cross(&s);
    if denom == 0.0 {
        return false;
    }

    let qp = q0 - p0;
    let t = qp.cross(&s) / denom;
    let u = qp.cross(&r) / denom;

    t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0
}

/// Segment `a-b` touches the cell.
///
/// True when `a` lies strictly inside the cell bounds, or when any of the
/// four cell edges properly crosses the segment. Only the first endpoint is
/// tested for containment; polygon traversal covers the second one as the
/// next edge's start.
pub fn segment_intersects_cell(a: Point2D, b: Point2D, cell: &Cell) -> bool {
    if cell.bounds().contains_strict(a) {
        return true;
    }

    cell.edges()
        .iter()
        .any(|&(e0, e1)| segments_cross(a, b, e0, e1))
}

/// Any perimeter edge (including the closing edge) touches the cell.
pub fn polygon_overlaps_cell(perimeter: &Perimeter, cell: &Cell) -> bool {
    perimeter
        .edges()
        .any(|(a, b)| segment_intersects_cell(a, b, cell))
}
