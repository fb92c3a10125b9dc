// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box-to-cell-range transform.
//!
//! Both grid population and the cut query go through [`cell_range`], so a
//! face is always looked up in the cells it was registered in.

use gmcut_geometry::{DBox3, IBox3};
use nalgebra::Point3;

/// Maps `bbox` to the inclusive range of cells it may overlap.
///
/// Per axis the lower bound is `floor((min - origin) / cell_size - tolerance)`
/// and the upper bound `ceil((max - origin) / cell_size + tolerance)`, both
/// clamped to `[0, n - 1]`. The range never misses an overlapped cell; it may
/// include extra ones.
pub fn cell_range(
    origin: &Point3<f64>,
    cell_size: f64,
    n_cells: [usize; 3],
    bbox: &DBox3,
    tolerance: f64,
) -> IBox3 {
    let mut min = [0usize; 3];
    let mut max = [0usize; 3];

    for axis in 0..3 {
        let last = n_cells[axis].saturating_sub(1) as f64;
        let lo = ((bbox.min[axis] - origin[axis]) / cell_size - tolerance).floor();
        let hi = ((bbox.max[axis] - origin[axis]) / cell_size + tolerance).ceil();
        // NaN casts to 0
        min[axis] = lo.clamp(0.0, last) as usize;
        max[axis] = hi.clamp(0.0, last) as usize;
    }

    IBox3::new(min, max)
}
