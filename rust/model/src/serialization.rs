// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON snapshots of models.
//!
//! A snapshot stores each live face as its three vertex positions. Loading
//! a snapshot replays simplex construction, so vertex and edge sharing are
//! rebuilt from positions rather than stored.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Model, ModelType, DEFAULT_BLOCK_SIZE};

/// Serializable representation of a model's faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub model_type: ModelType,
    pub vertex_tolerance: f64,
    pub faces: Vec<[[f64; 3]; 3]>,
}

impl Model {
    /// Creates a serializable snapshot of the live faces, in slot order.
    pub fn to_snapshot(&self) -> Result<ModelSnapshot> {
        let faces = self
            .faces
            .keys()
            .map(|fk| {
                self.face_vertices(fk)
                    .map(|pts| pts.map(|p| [p.x, p.y, p.z]))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ModelSnapshot {
            model_type: self.model_type,
            vertex_tolerance: self.vertex_tolerance,
            faces,
        })
    }

    /// Rebuilds a model from a snapshot.
    pub fn from_snapshot(snapshot: &ModelSnapshot) -> Result<Self> {
        let size = snapshot.faces.len().max(DEFAULT_BLOCK_SIZE);
        let mut model = Model::with_capacity(
            snapshot.model_type,
            size,
            size,
            snapshot.vertex_tolerance,
        );
        for face in snapshot.faces.iter().copied() {
            model.construct_simplex(face.map(|c| Point3::new(c[0], c[1], c[2])))?;
        }
        Ok(model)
    }

    /// Serializes the model to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let snapshot = self.to_snapshot()?;
        serde_json::to_string_pretty(&snapshot).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserializes a model from a JSON string produced by [`Model::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ModelSnapshot =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::from_snapshot(&snapshot)
    }
}
