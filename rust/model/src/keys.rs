// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element key types for arena-based storage.
//!
//! Keys are created by `slotmap::SlotMap` and remain valid even after
//! other elements are removed (generational indices).

use slotmap::new_key_type;

new_key_type! {
    /// Key for a vertex (point in space).
    pub struct VertexKey;

    /// Key for an edge (segment between two vertices).
    pub struct EdgeKey;

    /// Key for a face (triangle over three vertices).
    pub struct FaceKey;
}

/// Discriminant for model element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    Vertex = 0,
    Edge = 1,
    Face = 2,
    Shell = 3,
}

impl ElementType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Vertex => "Vertex",
            ElementType::Edge => "Edge",
            ElementType::Face => "Face",
            ElementType::Shell => "Shell",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
