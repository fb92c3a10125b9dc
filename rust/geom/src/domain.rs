// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volumetric knife domains.
//!
//! A knife domain answers one question: is a point inside? The cut keeps
//! a face only if none of its vertices are. [`IntervalDomain`] is the
//! concrete implementation, a run-length encoded set of voxels (or pixels
//! for 2D) stored as column intervals per `(plane, line)`.

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::Dimension;

/// A volumetric region that can be used as the knife of a cut.
pub trait KnifeDomain: Send + Sync {
    /// Dimensionality of the domain, compared against the given model.
    fn dimension(&self) -> Dimension;

    /// Returns `true` if `p` lies inside the domain.
    fn contains(&self, p: &Point3<f64>) -> bool;
}

/// Inclusive run of columns `start..=end` on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn contains(&self, column: i32) -> bool {
        (self.start..=self.end).contains(&column)
    }
}

/// Voxel domain stored as sorted, non-overlapping column intervals per
/// `(plane, line)`.
///
/// Positions map to voxels by rounding to the nearest integer: column from
/// `x`, line from `y`, plane from `z`. A 2D domain has the single plane 0
/// and ignores `z`.
#[derive(Debug, Clone)]
pub struct IntervalDomain {
    dimension: Dimension,
    lines: FxHashMap<(i32, i32), SmallVec<[Interval; 2]>>,
}

impl IntervalDomain {
    /// Creates an empty domain of the given dimension.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            lines: FxHashMap::default(),
        }
    }

    /// Creates a domain covering every voxel of the inclusive box
    /// `min..=max` (ordered `[column, line, plane]`).
    pub fn from_box(dimension: Dimension, min: [i32; 3], max: [i32; 3]) -> Result<Self> {
        let mut domain = Self::new(dimension);
        let planes = match dimension {
            Dimension::Two => 0..=0,
            Dimension::Three => min[2]..=max[2],
        };
        for plane in planes {
            for line in min[1]..=max[1] {
                domain.add_interval(plane, line, min[0], max[0])?;
            }
        }
        Ok(domain)
    }

    /// Adds the columns `start..=end` of `(plane, line)`, merging with
    /// overlapping or adjacent intervals already present.
    pub fn add_interval(&mut self, plane: i32, line: i32, start: i32, end: i32) -> Result<()> {
        if self.dimension == Dimension::Two && plane != 0 {
            return Err(Error::PlaneOutOfRange(plane));
        }
        let mut merged = Interval::new(start, end)?;
        let runs = self.lines.entry((plane, line)).or_default();

        // Absorb every run that overlaps or touches the new one.
        let mut kept: SmallVec<[Interval; 2]> = SmallVec::with_capacity(runs.len() + 1);
        for run in runs.drain(..) {
            if run.end.saturating_add(1) < merged.start
                || merged.end.saturating_add(1) < run.start
            {
                kept.push(run);
            } else {
                merged.start = merged.start.min(run.start);
                merged.end = merged.end.max(run.end);
            }
        }
        let at = kept.partition_point(|r| r.start < merged.start);
        kept.insert(at, merged);
        *runs = kept;
        Ok(())
    }

    /// Intervals of one line, sorted by start column.
    pub fn intervals(&self, plane: i32, line: i32) -> &[Interval] {
        self.lines
            .get(&(plane, line))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of voxels in the domain.
    pub fn voxel_count(&self) -> usize {
        self.lines
            .values()
            .flat_map(|runs| runs.iter())
            .map(Interval::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.values().all(|runs| runs.is_empty())
    }

    /// Returns `true` if the voxel `(column, line, plane)` is set.
    pub fn contains_voxel(&self, column: i32, line: i32, plane: i32) -> bool {
        let runs = self.intervals(plane, line);
        let at = runs.partition_point(|r| r.end < column);
        runs.get(at).is_some_and(|r| r.contains(column))
    }
}

/// Nearest voxel index; `None` when the coordinate is not representable.
fn nearest(v: f64) -> Option<i32> {
    let r = v.round();
    if r.is_finite() && r >= i32::MIN as f64 && r <= i32::MAX as f64 {
        Some(r as i32)
    } else {
        None
    }
}

impl KnifeDomain for IntervalDomain {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn contains(&self, p: &Point3<f64>) -> bool {
        let plane = match self.dimension {
            Dimension::Two => Some(0),
            Dimension::Three => nearest(p.z),
        };
        match (nearest(p.x), nearest(p.y), plane) {
            (Some(column), Some(line), Some(plane)) => self.contains_voxel(column, line, plane),
            _ => false,
        }
    }
}
