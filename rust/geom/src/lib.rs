// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gmcut geometry
//!
//! Geometric primitives shared by the geometric model and the cut core:
//! double and integer axis-aligned boxes, triangles, the exact
//! triangle/box and triangle/triangle intersection predicates, and
//! volumetric knife domains with point containment.
//!
//! Everything here is a pure function of its inputs. Nothing allocates
//! except domain construction.

pub mod bbox;
pub mod domain;
pub mod error;
pub mod intersect;
pub mod triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bbox::{DBox3, IBox3};
pub use domain::{Interval, IntervalDomain, KnifeDomain};
pub use error::{Error, Result};
pub use intersect::{triangle_aabb_intersect, triangle_triangle_intersect};
pub use triangle::Triangle;

/// Library-wide geometric tolerance for double precision comparisons.
///
/// Used by the box-to-cell-range transform to widen ranges so that elements
/// lying exactly on a cell boundary are not lost to rounding.
pub const DBL_TOLERANCE: f64 = 1.0e-9;

/// Dimensionality of a model or domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// Number of spatial axes.
    pub fn axes(&self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Two => "2D",
            Dimension::Three => "3D",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
