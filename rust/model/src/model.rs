// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for geometric model elements.
//!
//! The [`Model`] is the owner of all element data. Vertices, edges and
//! faces live in slot maps; upward adjacency indices (vertex → edges,
//! edge → faces) support sharing during construction and cleanup during
//! removal.

use gmcut_geometry::Dimension;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::keys::*;
use crate::spatial::SpatialIndex;

/// Default distance under which two positions are the same vertex.
pub const DEFAULT_VERTEX_TOLERANCE: f64 = 1.0e-6;

/// Default block size used to pre-size element storage.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Model type tag: dimensionality plus the vertex geometry flavour
/// (integer, double, double with normals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Model2I,
    Model2D,
    Model2N,
    Model3I,
    Model3D,
    Model3N,
}

impl ModelType {
    pub fn dimension(&self) -> Dimension {
        match self {
            ModelType::Model2I | ModelType::Model2D | ModelType::Model2N => Dimension::Two,
            ModelType::Model3I | ModelType::Model3D | ModelType::Model3N => Dimension::Three,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Model2I => "2I",
            ModelType::Model2D => "2D",
            ModelType::Model2N => "2N",
            ModelType::Model3I => "3I",
            ModelType::Model3D => "3D",
            ModelType::Model3N => "3N",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data stored for a vertex: a point in 3D space.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Data stored for an edge: a segment between two vertices.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub start: VertexKey,
    pub end: VertexKey,
}

/// Data stored for a face: a triangle. `edges[i]` joins `vertices[i]` and
/// `vertices[(i + 1) % 3]`.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub vertices: [VertexKey; 3],
    pub edges: [EdgeKey; 3],
}

/// A triangulated geometric model.
///
/// # Example
///
/// ```
/// use gmcut_model::{Model, ModelType};
/// use nalgebra::Point3;
///
/// let mut model = Model::new(ModelType::Model3D);
/// model
///     .construct_simplex([
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ])
///     .unwrap();
///
/// assert_eq!(model.face_count(), 1);
/// assert_eq!(model.vertex_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) model_type: ModelType,
    pub(crate) vertex_tolerance: f64,

    // Element storage
    pub(crate) vertices: SlotMap<VertexKey, VertexData>,
    pub(crate) edges: SlotMap<EdgeKey, EdgeData>,
    pub(crate) faces: SlotMap<FaceKey, FaceData>,

    // Upward adjacency: child → parents
    pub(crate) vertex_to_edges: FxHashMap<VertexKey, FxHashSet<EdgeKey>>,
    pub(crate) edge_to_faces: FxHashMap<EdgeKey, FxHashSet<FaceKey>>,

    // Edge sharing: (min_vertex, max_vertex) → EdgeKey
    pub(crate) edge_map: FxHashMap<(VertexKey, VertexKey), EdgeKey>,

    // Vertex matching by position
    pub(crate) vertex_index: SpatialIndex,
}

impl Model {
    /// Creates a new, empty model with default sizes and vertex tolerance.
    pub fn new(model_type: ModelType) -> Self {
        Self::with_capacity(
            model_type,
            DEFAULT_BLOCK_SIZE,
            DEFAULT_BLOCK_SIZE,
            DEFAULT_VERTEX_TOLERANCE,
        )
    }

    /// Creates a new, empty model with pre-sized element storage.
    ///
    /// `block_size` sizes the element arenas, `hash_size` the vertex
    /// matching and adjacency tables.
    pub fn with_capacity(
        model_type: ModelType,
        block_size: usize,
        hash_size: usize,
        vertex_tolerance: f64,
    ) -> Self {
        Self {
            model_type,
            vertex_tolerance,
            vertices: SlotMap::with_capacity_and_key(block_size),
            edges: SlotMap::with_capacity_and_key(block_size),
            faces: SlotMap::with_capacity_and_key(block_size),
            vertex_to_edges: FxHashMap::with_capacity_and_hasher(hash_size, Default::default()),
            edge_to_faces: FxHashMap::with_capacity_and_hasher(hash_size, Default::default()),
            edge_map: FxHashMap::with_capacity_and_hasher(hash_size, Default::default()),
            vertex_index: SpatialIndex::with_capacity(vertex_tolerance, hash_size),
        }
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn dimension(&self) -> Dimension {
        self.model_type.dimension()
    }

    /// Distance under which constructed positions merge with a vertex.
    pub fn vertex_tolerance(&self) -> f64 {
        self.vertex_tolerance
    }

    // --- Vertex operations ---

    /// Returns the vertex data for the given key, or `None` if not found.
    pub fn vertex(&self, key: VertexKey) -> Option<&VertexData> {
        self.vertices.get(key)
    }

    /// Returns the number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates live vertices in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &VertexData)> {
        self.vertices.iter()
    }

    // --- Edge operations ---

    /// Returns the edge data for the given key, or `None` if not found.
    pub fn edge(&self, key: EdgeKey) -> Option<&EdgeData> {
        self.edges.get(key)
    }

    /// Returns the number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge joining two vertices, in either direction.
    pub fn common_edge(&self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        self.edge_map.get(&canonical_pair(a, b)).copied()
    }

    // --- Face operations ---

    /// Returns the face data for the given key, or `None` if not found.
    pub fn face(&self, key: FaceKey) -> Option<&FaceData> {
        self.faces.get(key)
    }

    /// Returns the number of live faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterates live faces in slot order, skipping removed faces.
    pub fn faces(&self) -> impl Iterator<Item = (FaceKey, &FaceData)> {
        self.faces.iter()
    }

    /// Returns `true` if the face is live.
    pub fn contains_face(&self, key: FaceKey) -> bool {
        self.faces.contains_key(key)
    }

    /// Faces using the given edge.
    pub fn edge_faces(&self, key: EdgeKey) -> impl Iterator<Item = FaceKey> + '_ {
        self.edge_to_faces.get(&key).into_iter().flatten().copied()
    }

    /// Number of live elements of the given kind.
    pub fn element_count(&self, element: ElementType) -> usize {
        match element {
            ElementType::Vertex => self.vertex_count(),
            ElementType::Edge => self.edge_count(),
            ElementType::Face => self.face_count(),
            ElementType::Shell => self.shell_count(),
        }
    }

    // --- Adjacency index helpers ---

    /// Register that an edge uses a vertex (upward adjacency).
    pub(crate) fn link_vertex_edge(&mut self, vertex: VertexKey, edge: EdgeKey) {
        self.vertex_to_edges.entry(vertex).or_default().insert(edge);
    }

    /// Register that a face uses an edge (upward adjacency).
    pub(crate) fn link_edge_face(&mut self, edge: EdgeKey, face: FaceKey) {
        self.edge_to_faces.entry(edge).or_default().insert(face);
    }
}

/// Orders a vertex pair so that both directions share one edge entry.
pub(crate) fn canonical_pair(a: VertexKey, b: VertexKey) -> (VertexKey, VertexKey) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
