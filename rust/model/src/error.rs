// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model operations.

use crate::keys::{FaceKey, VertexKey};
use crate::model::ModelType;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during model operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Vertex key not found in the model.
    #[error("vertex not found: {0:?}")]
    VertexNotFound(VertexKey),

    /// Face key not found in the model (never created, or removed).
    #[error("face not found: {0:?}")]
    FaceNotFound(FaceKey),

    /// Two positions of a simplex matched the same vertex.
    #[error("degenerate simplex: positions {0} and {1} match the same vertex")]
    DegenerateSimplex(usize, usize),

    /// The operation is not available for this model type.
    #[error("{operation} is not supported for {model_type} models")]
    UnsupportedModelType {
        model_type: ModelType,
        operation: &'static str,
    },

    /// The model has no live vertices.
    #[error("model has no vertices")]
    EmptyModel,

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
