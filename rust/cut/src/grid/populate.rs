// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid population.

use gmcut_geometry::triangle_aabb_intersect;
use gmcut_model::{FaceKey, Model};

use super::{CellEntry, CellGrid};
use crate::error::Result;

impl CellGrid {
    /// Links every live face into each cell whose cube its triangle
    /// intersects. Faces are visited in slot order.
    pub(super) fn populate(&mut self, model: &Model) -> Result<()> {
        for (face, _) in model.faces() {
            let triangle = model.face_triangle(face)?;
            let range = self.cells_in_box(&triangle.bounding_box());

            for (x, y, z) in range.cells() {
                if triangle_aabb_intersect(&triangle, &self.cell_box(x, y, z)) {
                    self.link(x, y, z, face)?;
                }
            }
        }
        Ok(())
    }

    /// Pushes a new entry for `face` onto the head of cell `(x, y, z)`.
    fn link(&mut self, x: usize, y: usize, z: usize, face: FaceKey) -> Result<()> {
        let Some(cell) = self.cell_index(x, y, z) else {
            return Ok(());
        };
        let entry = self.entries.push(CellEntry {
            element: face,
            next: self.heads[cell],
        })?;
        self.heads[cell] = Some(entry);
        Ok(())
    }
}
