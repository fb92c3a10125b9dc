// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle definition

use nalgebra::{Point3, Vector3};

use crate::bbox::DBox3;

/// Triangle given by three positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3<f64>,
    pub v1: Point3<f64>,
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from a vertex array
    pub fn from_array(v: [Point3<f64>; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unnormalized normal, `(v1 - v0) x (v2 - v0)`
    pub fn scaled_normal(&self) -> Vector3<f64> {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Calculate triangle area
    pub fn area(&self) -> f64 {
        self.scaled_normal().norm() * 0.5
    }

    /// Edge vectors `v1 - v0`, `v2 - v1`, `v0 - v2`
    pub fn edges(&self) -> [Vector3<f64>; 3] {
        [self.v1 - self.v0, self.v2 - self.v1, self.v0 - self.v2]
    }

    /// Axis-aligned bounding box of the three vertices
    pub fn bounding_box(&self) -> DBox3 {
        DBox3 {
            min: self.v0.inf(&self.v1).inf(&self.v2),
            max: self.v0.sup(&self.v1).sup(&self.v2),
        }
    }

    /// Interval covered by the vertices projected onto `axis`
    #[inline]
    pub fn project(&self, axis: &Vector3<f64>) -> (f64, f64) {
        let a = axis.dot(&self.v0.coords);
        let b = axis.dot(&self.v1.coords);
        let c = axis.dot(&self.v2.coords);
        (a.min(b).min(c), a.max(b).max(c))
    }
}
