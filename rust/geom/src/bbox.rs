// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes.
//!
//! [`DBox3`] is a double precision box in model space. [`IBox3`] is an
//! inclusive box of integer cell indices, as produced by a cell grid range
//! query.

use nalgebra::{Point3, Vector3};

/// Double precision axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DBox3 {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl DBox3 {
    /// Creates a box from its corners. The corners are used as given.
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// An inverted box that any call to [`DBox3::expand`] will replace.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box enclosing all points, or `None` for an empty slice.
    pub fn from_points(points: &[Point3<f64>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut bbox = Self::empty();
        for p in points {
            bbox.expand(p);
        }
        Some(bbox)
    }

    /// Grows the box to include `p`.
    #[inline]
    pub fn expand(&mut self, p: &Point3<f64>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Grows the box to include `other`.
    pub fn union(&self, other: &DBox3) -> DBox3 {
        DBox3 {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// `true` until at least one point has been added.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Largest extent over the three axes.
    pub fn max_extent(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Closed-interval overlap test on all three axes.
    pub fn intersects(&self, other: &DBox3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Inclusive box of integer cell indices, ordered `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IBox3 {
    pub min: [usize; 3],
    pub max: [usize; 3],
}

impl IBox3 {
    pub fn new(min: [usize; 3], max: [usize; 3]) -> Self {
        Self { min, max }
    }

    /// Number of cells in the range.
    pub fn cell_count(&self) -> usize {
        (0..3)
            .map(|a| (self.max[a] + 1).saturating_sub(self.min[a]))
            .product()
    }

    /// `true` if `(x, y, z)` lies inside the inclusive range.
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        (self.min[0]..=self.max[0]).contains(&x)
            && (self.min[1]..=self.max[1]).contains(&y)
            && (self.min[2]..=self.max[2]).contains(&z)
    }

    /// Iterates the cells of the range, z outermost and x innermost.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (self.min[2]..=self.max[2]).flat_map(move |z| {
            (self.min[1]..=self.max[1])
                .flat_map(move |y| (self.min[0]..=self.max[0]).map(move |x| (x, y, z)))
        })
    }
}
