// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial hash for tolerance-based vertex matching.
//!
//! Uses a grid-based spatial hash for O(1) average-case nearest-vertex
//! queries. Simplex construction relies on it to recognise positions that
//! already exist in the model.

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::keys::VertexKey;
use crate::model::{Model, VertexData};

/// A spatial hash grid for fast tolerance-based vertex lookup.
///
/// The grid divides space into cubic cells of side `cell_size`. Lookups
/// check the 27 neighboring cells (3x3x3 neighborhood), so queries are
/// exact for tolerances up to `cell_size`.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size: f64,
    grid: FxHashMap<(i64, i64, i64), SmallVec<[VertexKey; 2]>>,
}

impl SpatialIndex {
    /// Creates a new spatial index with the given cell size.
    ///
    /// `cell_size` should be >= the tolerance used for queries.
    pub fn new(cell_size: f64) -> Self {
        Self::with_capacity(cell_size, 0)
    }

    /// Creates a spatial index with room for `capacity` occupied cells.
    pub fn with_capacity(cell_size: f64, capacity: usize) -> Self {
        Self {
            cell_size: cell_size.max(1e-10),
            grid: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a vertex key at the given position.
    pub fn insert(&mut self, key: VertexKey, p: &Point3<f64>) {
        let cell = self.cell_coords(p);
        self.grid.entry(cell).or_default().push(key);
    }

    /// Removes a vertex key previously inserted at `p`.
    pub fn remove(&mut self, key: VertexKey, p: &Point3<f64>) {
        let cell = self.cell_coords(p);
        if let Some(keys) = self.grid.get_mut(&cell) {
            keys.retain(|k| *k != key);
            if keys.is_empty() {
                self.grid.remove(&cell);
            }
        }
    }

    /// Finds the vertex nearest to `p` within `tolerance`.
    pub fn find_near(
        &self,
        vertices: &SlotMap<VertexKey, VertexData>,
        p: &Point3<f64>,
        tolerance: f64,
    ) -> Option<VertexKey> {
        let (cx, cy, cz) = self.cell_coords(p);
        let tol_sq = tolerance * tolerance;
        let mut best: Option<(VertexKey, f64)> = None;

        // Search 3x3x3 neighborhood
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(keys) = self.grid.get(&(
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    )) else {
                        continue;
                    };
                    for &vk in keys {
                        if let Some(v) = vertices.get(vk) {
                            let dist_sq =
                                (v.x - p.x).powi(2) + (v.y - p.y).powi(2) + (v.z - p.z).powi(2);
                            if dist_sq <= tol_sq && best.map_or(true, |(_, d)| dist_sq < d) {
                                best = Some((vk, dist_sq));
                            }
                        }
                    }
                }
            }
        }

        best.map(|(k, _)| k)
    }

    fn cell_coords(&self, p: &Point3<f64>) -> (i64, i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
            (p.z / self.cell_size).floor() as i64,
        )
    }
}

impl Model {
    /// Returns an existing vertex within the model's vertex tolerance of
    /// `p`, or creates a new one. This is the "match-or-create" step of
    /// simplex construction.
    pub(crate) fn find_or_add_vertex(&mut self, p: &Point3<f64>) -> VertexKey {
        if let Some(existing) = self.match_vertex(p) {
            return existing;
        }

        let key = self.vertices.insert(VertexData {
            x: p.x,
            y: p.y,
            z: p.z,
        });
        self.vertex_index.insert(key, p);
        key
    }

    /// Finds the vertex matching `p` within the model's vertex tolerance.
    pub fn match_vertex(&self, p: &Point3<f64>) -> Option<VertexKey> {
        self.vertex_index
            .find_near(&self.vertices, p, self.vertex_tolerance)
    }
}
