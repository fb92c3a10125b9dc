// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simplex construction and removal.
//!
//! Faces are built from three positions. Positions within the model's
//! vertex tolerance of an existing vertex reuse it, and faces over the same
//! vertex pair share one edge. Removal cleans up edges and vertices that no
//! face uses any more.

use std::collections::VecDeque;

use gmcut_geometry::Dimension;
use nalgebra::Point3;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::keys::*;
use crate::model::{canonical_pair, EdgeData, FaceData, Model};

impl Model {
    /// Constructs a triangular face through three positions.
    ///
    /// Returns an error for 2D models, and when two positions collapse onto
    /// the same vertex.
    pub fn construct_simplex(&mut self, positions: [Point3<f64>; 3]) -> Result<FaceKey> {
        if self.dimension() != Dimension::Three {
            return Err(Error::UnsupportedModelType {
                model_type: self.model_type,
                operation: "simplex construction",
            });
        }

        // Check collapse before touching the model so a failed call leaves
        // no orphan vertices behind.
        let matched = positions.map(|p| self.match_vertex(&p));
        for (i, j) in [(0, 1), (1, 2), (0, 2)] {
            if let (Some(a), Some(b)) = (matched[i], matched[j]) {
                if a == b {
                    return Err(Error::DegenerateSimplex(i, j));
                }
            }
            let d = positions[i] - positions[j];
            if matched[i].is_none() && matched[j].is_none() && d.norm() <= self.vertex_tolerance {
                return Err(Error::DegenerateSimplex(i, j));
            }
        }

        let vertices = [
            self.find_or_add_vertex(&positions[0]),
            self.find_or_add_vertex(&positions[1]),
            self.find_or_add_vertex(&positions[2]),
        ];
        for (i, j) in [(0, 1), (1, 2), (0, 2)] {
            if vertices[i] == vertices[j] {
                self.remove_orphan_vertices(&vertices);
                return Err(Error::DegenerateSimplex(i, j));
            }
        }

        let edges = [
            self.find_or_add_edge(vertices[0], vertices[1]),
            self.find_or_add_edge(vertices[1], vertices[2]),
            self.find_or_add_edge(vertices[2], vertices[0]),
        ];

        let key = self.faces.insert(FaceData { vertices, edges });
        for &ek in &edges {
            self.link_edge_face(ek, key);
        }
        Ok(key)
    }

    /// Removes a face, then any edge and vertex no live face uses.
    ///
    /// Keys of every other element stay valid.
    pub fn remove_face(&mut self, key: FaceKey) -> Result<()> {
        let face = self.faces.remove(key).ok_or(Error::FaceNotFound(key))?;

        for &ek in &face.edges {
            let orphan = match self.edge_to_faces.get_mut(&ek) {
                Some(faces) => {
                    faces.remove(&key);
                    faces.is_empty()
                }
                None => true,
            };
            if !orphan {
                continue;
            }

            self.edge_to_faces.remove(&ek);
            if let Some(edge) = self.edges.remove(ek) {
                self.edge_map.remove(&canonical_pair(edge.start, edge.end));
                for vk in [edge.start, edge.end] {
                    if let Some(edges) = self.vertex_to_edges.get_mut(&vk) {
                        edges.remove(&ek);
                    }
                }
            }
        }

        self.remove_orphan_vertices(&face.vertices);
        Ok(())
    }

    /// Number of shells: groups of faces connected through shared edges.
    pub fn shell_count(&self) -> usize {
        self.shells().len()
    }

    /// Faces grouped into shells, each shell in breadth-first order from
    /// its lowest face in slot order.
    pub fn shells(&self) -> Vec<Vec<FaceKey>> {
        let mut visited: FxHashSet<FaceKey> = FxHashSet::default();
        let mut shells = Vec::new();

        for (start, _) in self.faces.iter() {
            if !visited.insert(start) {
                continue;
            }

            let mut shell = Vec::new();
            let mut queue = VecDeque::from([start]);
            while let Some(fk) = queue.pop_front() {
                shell.push(fk);
                let Some(face) = self.faces.get(fk) else {
                    continue;
                };
                for &ek in &face.edges {
                    for neighbor in self.edge_faces(ek) {
                        if visited.insert(neighbor) {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
            shells.push(shell);
        }

        shells
    }

    fn find_or_add_edge(&mut self, start: VertexKey, end: VertexKey) -> EdgeKey {
        let canonical = canonical_pair(start, end);
        if let Some(&existing) = self.edge_map.get(&canonical) {
            return existing;
        }

        let key = self.edges.insert(EdgeData { start, end });
        self.edge_map.insert(canonical, key);
        self.link_vertex_edge(start, key);
        self.link_vertex_edge(end, key);
        key
    }

    fn remove_orphan_vertices(&mut self, vertices: &[VertexKey]) {
        for &vk in vertices {
            let used = self
                .vertex_to_edges
                .get(&vk)
                .is_some_and(|edges| !edges.is_empty());
            if used {
                continue;
            }

            self.vertex_to_edges.remove(&vk);
            if let Some(v) = self.vertices.remove(vk) {
                self.vertex_index.remove(vk, &Point3::new(v.x, v.y, v.z));
            }
        }
    }
}
