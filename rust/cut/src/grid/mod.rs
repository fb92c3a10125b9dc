// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Uniform 3D cell grid over the faces of a model.
//!
//! The grid covers the model's bounding box with cubic cells. The cell size
//! is chosen from the element count so that a cell holds about one face on
//! average:
//!
//! ```text
//! cell_size = max_extent / cbrt(face_count + 1)
//! n_cells   = ceil(extent / cell_size) + 1      (per axis)
//! ```
//!
//! Each cell owns a singly linked list of [`CellEntry`] values stored in a
//! [`CellEntryArena`]. A face is listed in every cell whose cube its
//! triangle intersects. The grid only holds face keys; it never frees or
//! alters the model.

mod arena;
mod populate;
mod range;

pub use arena::{CellEntry, CellEntryArena};
pub use range::cell_range;

use gmcut_geometry::{DBox3, Dimension, IBox3};
use gmcut_model::{ElementType, FaceKey, Model};
use nalgebra::{Point3, Vector3};

use crate::config::CutConfig;
use crate::error::{Error, Result};

/// Spatial partition of one model's faces into uniform cubic cells.
#[derive(Debug, Clone)]
pub struct CellGrid {
    origin: Point3<f64>,
    cell_size: f64,
    n_cells: [usize; 3],
    tolerance: f64,
    element_type: ElementType,
    min_block_size: usize,
    // Flat head array addressed by (z * ny + y) * nx + x
    heads: Vec<Option<u32>>,
    entries: CellEntryArena,
}

impl CellGrid {
    /// Builds a grid over the live elements of `element` kind in `model`.
    ///
    /// Only face grids over 3D models are supported. A model without live
    /// faces is [`Error::DegenerateInput`].
    pub fn build(model: &Model, element: ElementType, config: &CutConfig) -> Result<Self> {
        let mut grid = Self {
            origin: Point3::origin(),
            cell_size: 1.0,
            n_cells: [0; 3],
            tolerance: config.tolerance,
            element_type: element,
            min_block_size: config.min_block_size,
            heads: Vec::new(),
            entries: CellEntryArena::new(config.min_block_size),
        };
        grid.rebuild(model)?;
        Ok(grid)
    }

    /// Re-derives the grid from `model`, which may have changed since the
    /// last build.
    ///
    /// The head array is reused when the cell counts are unchanged and the
    /// entry arena always keeps its allocation. On error the grid is left
    /// empty.
    pub fn rebuild(&mut self, model: &Model) -> Result<()> {
        let result = self.try_rebuild(model);
        if result.is_err() {
            self.heads.clear();
            self.entries.clear();
            self.n_cells = [0; 3];
        }
        result
    }

    fn try_rebuild(&mut self, model: &Model) -> Result<()> {
        if self.element_type != ElementType::Face {
            return Err(Error::Unimplemented(
                "cell grids over vertices, edges or shells",
            ));
        }
        if model.dimension() != Dimension::Three {
            return Err(Error::Unimplemented("cell grids over 2D models"));
        }

        let count = model.element_count(self.element_type);
        if count == 0 {
            return Err(Error::DegenerateInput(self.element_type));
        }

        let bbox = model.bounding_box()?;
        let (cell_size, n_cells) = grid_geometry(&bbox, count)?;
        let total = n_cells
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .unwrap_or(usize::MAX);

        if n_cells == self.n_cells && self.heads.len() == total {
            self.heads.fill(None);
            tracing::debug!(?n_cells, "Reusing cell array");
        } else {
            let mut heads = Vec::new();
            heads.try_reserve_exact(total)?;
            heads.resize(total, None);
            self.heads = heads;
        }

        self.origin = bbox.min;
        self.cell_size = cell_size;
        self.n_cells = n_cells;
        self.entries.clear();
        self.entries
            .set_block_size((count / 16).max(self.min_block_size));

        tracing::debug!(
            elements = count,
            cell_size,
            nx = n_cells[0],
            ny = n_cells[1],
            nz = n_cells[2],
            "Grid geometry"
        );

        self.populate(model)?;

        tracing::debug!(
            entries = self.entries.len(),
            cells = total,
            "Grid populated"
        );
        Ok(())
    }

    /// Minimum corner of the grid.
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Edge length of a cubic cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of cells along x, y and z.
    pub fn n_cells(&self) -> [usize; 3] {
        self.n_cells
    }

    /// Tolerance applied by [`CellGrid::cells_in_box`].
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Number of cell entries in use (the arena's high-water mark).
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Inclusive range of cells that `bbox` may overlap.
    pub fn cells_in_box(&self, bbox: &DBox3) -> IBox3 {
        cell_range(
            &self.origin,
            self.cell_size,
            self.n_cells,
            bbox,
            self.tolerance,
        )
    }

    /// The closed cube of cell `(x, y, z)`.
    pub fn cell_box(&self, x: usize, y: usize, z: usize) -> DBox3 {
        let min = self.origin + Vector3::new(x as f64, y as f64, z as f64) * self.cell_size;
        DBox3::new(min, min + Vector3::repeat(self.cell_size))
    }

    /// Faces listed in cell `(x, y, z)`, most recently linked first. Cells
    /// outside the grid are empty.
    pub fn cell_entries(&self, x: usize, y: usize, z: usize) -> CellEntries<'_> {
        let head = self
            .cell_index(x, y, z)
            .and_then(|i| self.heads.get(i).copied().flatten());
        CellEntries {
            arena: &self.entries,
            next: head,
        }
    }

    /// Every `(cell, face)` membership, cells in z, y, x order.
    pub fn memberships(&self) -> Vec<([usize; 3], FaceKey)> {
        if self.heads.is_empty() {
            return Vec::new();
        }
        let all = IBox3::new([0; 3], self.n_cells.map(|n| n - 1));
        let mut out = Vec::with_capacity(self.entries.len());
        for (x, y, z) in all.cells() {
            out.extend(self.cell_entries(x, y, z).map(|face| ([x, y, z], face)));
        }
        out
    }

    fn cell_index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let [nx, ny, nz] = self.n_cells;
        (x < nx && y < ny && z < nz).then(|| (z * ny + y) * nx + x)
    }
}

/// Iterator over the faces of one cell list.
#[derive(Debug, Clone)]
pub struct CellEntries<'a> {
    arena: &'a CellEntryArena,
    next: Option<u32>,
}

impl Iterator for CellEntries<'_> {
    type Item = FaceKey;

    fn next(&mut self) -> Option<FaceKey> {
        let entry = self.arena.get(self.next?)?;
        self.next = entry.next;
        Some(entry.element)
    }
}

/// Cell size and per-axis cell counts for `count` elements in `bbox`.
///
/// A zero-extent box (a single point) falls back to unit cells. A box whose
/// extent overflows `f64` is [`Error::NonFiniteExtent`].
fn grid_geometry(bbox: &DBox3, count: usize) -> Result<(f64, [usize; 3])> {
    let extent = bbox.size();
    if !extent.iter().all(|e| e.is_finite()) {
        return Err(Error::NonFiniteExtent([extent.x, extent.y, extent.z]));
    }
    let mut cell_size = bbox.max_extent() / ((count + 1) as f64).cbrt();
    if !(cell_size.is_finite() && cell_size > 0.0) {
        cell_size = 1.0;
    }
    let n_cells = [0, 1, 2].map(|axis| (extent[axis] / cell_size).ceil().max(0.0) as usize + 1);
    Ok((cell_size, n_cells))
}
