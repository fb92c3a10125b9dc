// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gmcut model
//!
//! Triangulated geometric models: vertices, edges and triangular faces
//! stored in slot maps with stable, generational keys.
//!
//! Removing an element vacates its slot without disturbing any other key,
//! so code holding keys (a spatial grid, for instance) stays valid as long
//! as the element itself is live. Iteration visits live elements in slot
//! order and skips vacated slots.
//!
//! Faces are added with [`Model::construct_simplex`], which merges the
//! three positions with existing vertices within the model's vertex
//! tolerance and shares edges between faces.

pub mod construction;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod model;
pub mod serialization;
pub mod spatial;

pub use error::{Error, Result};
pub use keys::{EdgeKey, ElementType, FaceKey, VertexKey};
pub use model::{EdgeData, FaceData, Model, ModelType, VertexData};
pub use serialization::ModelSnapshot;
