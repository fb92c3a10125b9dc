// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::{add_cube, cube, sheet, sphere};
use gmcut::{cell_range, CellGrid, CutConfig, ElementType};
use gmcut_geometry::{triangle_aabb_intersect, DBox3, IBox3};
use gmcut_model::FaceKey;
use nalgebra::Point3;
use rustc_hash::FxHashMap;

fn build(model: &gmcut_model::Model) -> CellGrid {
    CellGrid::build(model, ElementType::Face, &CutConfig::default()).unwrap()
}

fn all_cells(grid: &CellGrid) -> IBox3 {
    IBox3::new([0; 3], grid.n_cells().map(|n| n - 1))
}

/// Deterministic linear congruential sequence in `[0, 1)`.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[test]
fn every_face_is_listed_in_exactly_the_cells_it_touches() {
    let model = sphere([0.3, -0.2, 1.0], 2.0, 12, 16);
    let grid = build(&model);

    let mut listed: FxHashMap<([usize; 3], FaceKey), usize> = FxHashMap::default();
    for membership in grid.memberships() {
        *listed.entry(membership).or_default() += 1;
    }

    for (face, _) in model.faces() {
        let triangle = model.face_triangle(face).unwrap();
        for (x, y, z) in all_cells(&grid).cells() {
            let touches = triangle_aabb_intersect(&triangle, &grid.cell_box(x, y, z));
            let count = listed.get(&([x, y, z], face)).copied().unwrap_or(0);
            assert_eq!(
                count,
                usize::from(touches),
                "face {face:?} in cell ({x}, {y}, {z})"
            );
        }
    }
}

#[test]
fn every_face_is_listed_somewhere() {
    let model = sheet(8, 3.0, 0.5);
    let grid = build(&model);

    let memberships = grid.memberships();
    assert_eq!(memberships.len(), grid.entry_count());
    for (face, _) in model.faces() {
        assert!(memberships.iter().any(|(_, f)| *f == face));
    }
}

#[test]
fn range_contains_every_overlapping_cell() {
    let model = sphere([0.0, 0.0, 0.0], 1.0, 8, 8);
    let grid = build(&model);
    let mut rng = Lcg(7);

    for _ in 0..200 {
        let min = Point3::new(
            rng.next() * 3.0 - 1.5,
            rng.next() * 3.0 - 1.5,
            rng.next() * 3.0 - 1.5,
        );
        let max = min + nalgebra::Vector3::new(rng.next(), rng.next(), rng.next()) * 1.2;
        let bbox = DBox3::new(min, max);

        let range = grid.cells_in_box(&bbox);
        for (x, y, z) in all_cells(&grid).cells() {
            if grid.cell_box(x, y, z).intersects(&bbox) {
                assert!(range.contains(x, y, z), "cell ({x}, {y}, {z}) missed");
            }
        }
    }
}

#[test]
fn range_matches_free_function() {
    let model = cube([-1.0, 2.0, 0.5], 2.0);
    let grid = build(&model);
    let bbox = DBox3::new(Point3::new(-0.5, 2.5, 1.0), Point3::new(0.5, 3.0, 2.0));

    assert_eq!(
        grid.cells_in_box(&bbox),
        cell_range(
            &grid.origin(),
            grid.cell_size(),
            grid.n_cells(),
            &bbox,
            grid.tolerance()
        )
    );
}

#[test]
fn building_twice_gives_the_same_grid() {
    let model = sphere([1.0, 1.0, 1.0], 0.5, 10, 10);
    let a = build(&model);
    let b = build(&model);

    assert_eq!(a.cell_size(), b.cell_size());
    assert_eq!(a.n_cells(), b.n_cells());

    let mut ma = a.memberships();
    let mut mb = b.memberships();
    ma.sort();
    mb.sort();
    assert_eq!(ma, mb);
}

#[test]
fn rebuild_matches_fresh_build() {
    let mut model = cube([0.0, 0.0, 0.0], 1.0);
    let mut grid = build(&model);
    let before = grid.memberships();

    // Same model: identical memberships
    grid.rebuild(&model).unwrap();
    assert_eq!(grid.memberships(), before);

    // Changed model: matches a grid built from scratch
    add_cube(&mut model, [3.0, 0.0, 0.0], 1.0);
    let removed = model.faces().map(|(k, _)| k).next().unwrap();
    model.remove_face(removed).unwrap();
    grid.rebuild(&model).unwrap();

    let fresh = build(&model);
    assert_eq!(grid.n_cells(), fresh.n_cells());
    assert_eq!(grid.cell_size(), fresh.cell_size());
    assert_eq!(grid.memberships(), fresh.memberships());
    assert!(grid.memberships().iter().all(|(_, f)| *f != removed));
}

#[test]
fn cell_lists_are_most_recent_first() {
    // Three stacked copies of one triangle land in the same cells
    let mut model = gmcut_model::Model::new(gmcut_model::ModelType::Model3D);
    for z in [0.0, 0.001, 0.002] {
        model
            .construct_simplex([
                Point3::new(0.0, 0.0, z),
                Point3::new(0.1, 0.0, z),
                Point3::new(0.0, 0.1, z),
            ])
            .unwrap();
    }
    let grid = build(&model);
    let faces: Vec<FaceKey> = model.faces().map(|(k, _)| k).collect();

    let listed: Vec<FaceKey> = grid.cell_entries(0, 0, 0).collect();
    assert_eq!(listed, vec![faces[2], faces[1], faces[0]]);
}
