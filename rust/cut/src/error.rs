// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for grid construction and cutting.

use gmcut_model::ElementType;

/// Result type alias for grid and cut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a grid or cutting a model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required operand was never supplied.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The requested configuration exists but has no implementation.
    #[error("not implemented: {0}")]
    Unimplemented(&'static str),

    /// Given model and knife disagree on model type or dimensionality.
    #[error("dimension mismatch: given is {given}, knife is {knife}")]
    DimensionMismatch {
        given: &'static str,
        knife: &'static str,
    },


    /// The model has no live elements of the required kind.
    #[error("degenerate input: no live {0} elements")]
    DegenerateInput(ElementType),

    /// The model's bounding box is too large for its extent to be finite.
    #[error("model extent is not finite: {0:?}")]
    NonFiniteExtent([f64; 3]),

    /// Growing the cell array or the cell-entry arena failed.
    #[error("allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    /// The cell-entry arena ran out of entry indices.
    #[error("cell entry arena is full ({0} entries)")]
    ArenaFull(usize),

    /// A model operation failed (face access, simplex construction).
    #[error(transparent)]
    Model(#[from] gmcut_model::Error),
}
