// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric queries on model elements.

use gmcut_geometry::{DBox3, Triangle};
use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::keys::*;
use crate::model::Model;

impl Model {
    /// Returns the 3D position of a vertex as a nalgebra Point3.
    pub fn vertex_point(&self, key: VertexKey) -> Option<Point3<f64>> {
        self.vertices
            .get(key)
            .map(|v| Point3::new(v.x, v.y, v.z))
    }

    /// Positions of a face's three vertices, in face order.
    pub fn face_vertices(&self, key: FaceKey) -> Result<[Point3<f64>; 3]> {
        let face = self.faces.get(key).ok_or(Error::FaceNotFound(key))?;
        let mut points = [Point3::origin(); 3];
        for (slot, &vk) in points.iter_mut().zip(&face.vertices) {
            *slot = self.vertex_point(vk).ok_or(Error::VertexNotFound(vk))?;
        }
        Ok(points)
    }

    /// The face as a geometric triangle.
    pub fn face_triangle(&self, key: FaceKey) -> Result<Triangle> {
        self.face_vertices(key).map(Triangle::from_array)
    }

    pub fn face_area(&self, key: FaceKey) -> Result<f64> {
        Ok(self.face_triangle(key)?.area())
    }

    /// Axis-aligned bounding box of all live vertices.
    ///
    /// Returns [`Error::EmptyModel`] when the model has no vertices.
    pub fn bounding_box(&self) -> Result<DBox3> {
        if self.vertices.is_empty() {
            return Err(Error::EmptyModel);
        }

        let mut bbox = DBox3::empty();
        for (_, v) in self.vertices() {
            bbox.expand(&Point3::new(v.x, v.y, v.z));
        }
        Ok(bbox)
    }
}
