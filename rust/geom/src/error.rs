// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometry construction.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building geometric primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An interval whose end lies before its start.
    #[error("invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: i32, end: i32 },

    /// A 2D domain was given a plane other than 0.
    #[error("plane {0} is out of range for a 2D domain")]
    PlaneOutOfRange(i32),
}
