// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cut configuration, optionally loaded from environment variables.

use gmcut_geometry::DBL_TOLERANCE;
use gmcut_model::model::{DEFAULT_BLOCK_SIZE, DEFAULT_VERTEX_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Grid and cut configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutConfig {
    /// Tolerance, in cell units, widening every box-to-cell-range query.
    pub tolerance: f64,
    /// Distance under which the output model merges a position with an
    /// existing vertex.
    pub vertex_tolerance: f64,
    /// Lower bound of the output model block size and of the cell-entry
    /// arena growth step.
    pub min_block_size: usize,
    /// Classify faces on the rayon thread pool.
    pub parallel: bool,
}

impl CutConfig {
    /// Load configuration from `GMCUT_*` environment variables, falling
    /// back to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tolerance: std::env::var("GMCUT_TOLERANCE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.tolerance),
            vertex_tolerance: std::env::var("GMCUT_VERTEX_TOLERANCE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.vertex_tolerance),
            min_block_size: std::env::var("GMCUT_MIN_BLOCK_SIZE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.min_block_size),
            parallel: std::env::var("GMCUT_PARALLEL")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.parallel),
        }
    }

    /// Block size for storage sized from `count` elements: one sixteenth of
    /// the count, never below `min_block_size`.
    pub fn block_size_for(&self, count: usize) -> usize {
        (count / 16).max(self.min_block_size)
    }
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            tolerance: DBL_TOLERANCE,
            vertex_tolerance: DEFAULT_VERTEX_TOLERANCE,
            min_block_size: DEFAULT_BLOCK_SIZE,
            parallel: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
