// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact intersection predicates for triangles.
//!
//! Both tests are separating axis tests: two convex sets are disjoint iff
//! their projections onto some candidate axis do not overlap. Touching
//! counts as intersecting, so a triangle lying on a cell face belongs to
//! the cell and two triangles sharing an edge intersect.

use nalgebra::Vector3;

use crate::bbox::DBox3;
use crate::triangle::Triangle;

/// Axes shorter than this fraction of the generating edge are treated as
/// degenerate (parallel edges) and skipped.
const AXIS_EPSILON: f64 = 1.0e-12;

/// Normalizes `axis`, or returns `None` when it is degenerate relative to
/// `scale` (the length of the edge it was derived from).
#[inline]
fn unit_axis(axis: Vector3<f64>, scale: f64) -> Option<Vector3<f64>> {
    let len = axis.norm();
    if len <= AXIS_EPSILON * scale.max(f64::MIN_POSITIVE) {
        None
    } else {
        Some(axis / len)
    }
}

#[inline]
fn disjoint(a: (f64, f64), b: (f64, f64)) -> bool {
    a.1 < b.0 || b.1 < a.0
}

/// Tests a triangle against a closed axis-aligned box.
///
/// Uses the 13 axes of Akenine-Möller's test: the three box normals, the
/// triangle normal and the nine cross products of box and triangle edges.
pub fn triangle_aabb_intersect(tri: &Triangle, bbox: &DBox3) -> bool {
    // Box normals reduce to a bounding box overlap test.
    if !tri.bounding_box().intersects(bbox) {
        return false;
    }

    let center = bbox.center().coords;
    let half = bbox.size() * 0.5;
    let box_interval = |axis: &Vector3<f64>| {
        let c = axis.dot(&center);
        let r = half.x * axis.x.abs() + half.y * axis.y.abs() + half.z * axis.z.abs();
        (c - r, c + r)
    };

    let box_axes = [Vector3::x(), Vector3::y(), Vector3::z()];
    let edges = tri.edges();
    let scale = edges.iter().map(|e| e.norm()).fold(0.0, f64::max);

    if let Some(n) = unit_axis(tri.scaled_normal(), scale * scale) {
        if disjoint(tri.project(&n), box_interval(&n)) {
            return false;
        }
    }

    for e in &edges {
        let len = e.norm();
        for b in &box_axes {
            if let Some(axis) = unit_axis(b.cross(e), len) {
                if disjoint(tri.project(&axis), box_interval(&axis)) {
                    return false;
                }
            }
        }
    }

    true
}

/// Tests two triangles for intersection, coplanar pairs included.
///
/// Candidate axes are both face normals, the nine edge/edge cross products
/// (sufficient when the planes are not parallel) and the six in-plane edge
/// normals (needed when they are).
pub fn triangle_triangle_intersect(a: &Triangle, b: &Triangle) -> bool {
    if !a.bounding_box().intersects(&b.bounding_box()) {
        return false;
    }

    let ea = a.edges();
    let eb = b.edges();
    let scale_a = ea.iter().map(|e| e.norm()).fold(0.0, f64::max);
    let scale_b = eb.iter().map(|e| e.norm()).fold(0.0, f64::max);
    let separated = |axis: Vector3<f64>, scale: f64| match unit_axis(axis, scale) {
        Some(axis) => disjoint(a.project(&axis), b.project(&axis)),
        None => false,
    };

    let na = a.scaled_normal();
    let nb = b.scaled_normal();
    if separated(na, scale_a * scale_a) || separated(nb, scale_b * scale_b) {
        return false;
    }

    for e in &ea {
        for f in &eb {
            if separated(e.cross(f), e.norm() * f.norm()) {
                return false;
            }
        }
    }

    for e in &ea {
        if separated(na.cross(e), scale_a * scale_a * e.norm()) {
            return false;
        }
    }
    for f in &eb {
        if separated(nb.cross(f), scale_b * scale_b * f.norm()) {
            return false;
        }
    }

    true
}
