// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::{cube, face_points, sheet, sphere, triangle};
use gmcut::{cut, cut_domain, CutConfig, CutRequest, ElementType, Error};
use gmcut_geometry::{triangle_triangle_intersect, Dimension, IntervalDomain, Triangle};
use gmcut_model::{Model, ModelType};

fn parallel() -> CutConfig {
    CutConfig {
        parallel: true,
        ..CutConfig::default()
    }
}

/// Knife crossing the top face of the unit cube through its centre.
fn top_knife() -> Model {
    triangle([[0.3, 0.5, 0.8], [0.7, 0.5, 0.8], [0.5, 0.5, 1.2]])
}

#[test]
fn cube_cut_by_one_triangle_keeps_ten_faces() {
    let given = cube([0.0, 0.0, 0.0], 1.0);
    let knife = top_knife();

    let result = cut(&given, &knife, &CutConfig::default()).unwrap();
    assert_eq!(result.face_count(), 10);
    assert_eq!(result.model_type(), ModelType::Model3D);

    // Survivors are the non-top faces, in order, with identical geometry
    let expected: Vec<_> = face_points(&given)
        .into_iter()
        .filter(|pts| !pts.iter().all(|p| p.z == 1.0))
        .collect();
    assert_eq!(face_points(&result), expected);

    // Cutting again changes nothing
    let again = cut(&result, &knife, &CutConfig::default()).unwrap();
    assert_eq!(again.face_count(), 10);
    assert_eq!(face_points(&again), face_points(&result));

    // Inputs are untouched
    assert_eq!(given.face_count(), 12);
    assert_eq!(knife.face_count(), 1);
}

#[test]
fn disjoint_models_keep_every_face() {
    let given = sphere([0.0, 0.0, 0.0], 1.0, 10, 12);
    let knife = cube([3.0, 3.0, 3.0], 1.0);

    let result = cut(&given, &knife, &CutConfig::default()).unwrap();
    assert_eq!(result.face_count(), given.face_count());
    assert_eq!(result.vertex_count(), given.vertex_count());
    assert_eq!(face_points(&result), face_points(&given));
}

#[test]
fn cutting_by_itself_removes_everything() {
    let given = sphere([1.0, 2.0, 3.0], 1.5, 8, 10);

    let result = cut(&given, &given, &CutConfig::default()).unwrap();
    assert_eq!(result.face_count(), 0);
    assert_eq!(result.vertex_count(), 0);

    let copy = given.clone();
    let result = cut(&given, &copy, &parallel()).unwrap();
    assert_eq!(result.face_count(), 0);
}

#[test]
fn no_survivor_intersects_the_knife() {
    let given = sheet(12, 4.0, 0.0);
    let knife = sphere([2.0, 2.0, 0.0], 1.0, 8, 12);

    let result = cut(&given, &knife, &CutConfig::default()).unwrap();
    assert!(result.face_count() > 0);
    assert!(result.face_count() < given.face_count());

    let knife_triangles: Vec<Triangle> = face_points(&knife)
        .into_iter()
        .map(Triangle::from_array)
        .collect();
    for pts in face_points(&result) {
        let survivor = Triangle::from_array(pts);
        assert!(knife_triangles
            .iter()
            .all(|k| !triangle_triangle_intersect(&survivor, k)));
    }

    // Every removed face has a witness
    let kept = face_points(&result);
    for pts in face_points(&given) {
        if !kept.contains(&pts) {
            let removed = Triangle::from_array(pts);
            assert!(knife_triangles
                .iter()
                .any(|k| triangle_triangle_intersect(&removed, k)));
        }
    }
}

#[test]
fn parallel_cut_matches_sequential() {
    let given = sheet(16, 4.0, 0.25);
    let knife = sphere([1.5, 2.5, 0.0], 1.2, 10, 14);

    let sequential = cut(&given, &knife, &CutConfig::default()).unwrap();
    let parallel = cut(&given, &knife, &parallel()).unwrap();
    assert_eq!(face_points(&parallel), face_points(&sequential));
}

#[test]
fn missing_operands_produce_no_model() {
    let given = cube([0.0, 0.0, 0.0], 1.0);
    let knife = top_knife();

    assert!(matches!(
        CutRequest::new().knife(&knife).run(),
        Err(Error::MissingInput(_))
    ));
    assert!(matches!(
        CutRequest::new().given(&given).run(),
        Err(Error::MissingInput(_))
    ));

    let result = CutRequest::new()
        .given(&given)
        .knife(&knife)
        .config(CutConfig::default())
        .run()
        .unwrap();
    assert_eq!(result.face_count(), 10);
}

#[test]
fn mismatched_models_produce_no_model() {
    let given = cube([0.0, 0.0, 0.0], 1.0);
    let knife = Model::new(ModelType::Model3I);
    assert!(matches!(
        cut(&given, &knife, &CutConfig::default()),
        Err(Error::DimensionMismatch { .. })
    ));

    let planar = IntervalDomain::from_box(Dimension::Two, [0, 0, 0], [4, 4, 0]).unwrap();
    assert!(matches!(
        cut_domain(&given, &planar, &CutConfig::default()),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn empty_knife_is_reported() {
    let given = cube([0.0, 0.0, 0.0], 1.0);
    let knife = Model::new(ModelType::Model3D);
    let err = cut(&given, &knife, &CutConfig::default()).unwrap_err();
    assert!(matches!(err, Error::DegenerateInput(ElementType::Face)));
    assert!(err.to_string().contains("Face"));
}

#[test]
fn domain_cut_removes_faces_with_a_vertex_inside() {
    let given = cube([0.0, 0.0, 0.0], 10.0);

    // A slab around the top: every triangle except the bottom two has a
    // corner at z = 10
    let slab = IntervalDomain::from_box(Dimension::Three, [-1, -1, 9], [11, 11, 11]).unwrap();
    let result = cut_domain(&given, &slab, &CutConfig::default()).unwrap();
    assert_eq!(result.face_count(), 2);
    for pts in face_points(&result) {
        assert!(pts.iter().all(|p| p.z == 0.0));
    }

    let far = IntervalDomain::from_box(Dimension::Three, [50, 50, 50], [60, 60, 60]).unwrap();
    let result = cut_domain(&given, &far, &parallel()).unwrap();
    assert_eq!(face_points(&result), face_points(&given));
}

#[test]
fn domain_cut_keeps_faces_passing_through_without_a_vertex_inside() {
    // The triangle spans the voxel at the origin but no corner rounds to it
    let given = triangle([[-3.0, -3.0, 0.0], [3.0, -3.0, 0.0], [0.0, 3.0, 0.0]]);
    let domain = IntervalDomain::from_box(Dimension::Three, [0, 0, 0], [0, 0, 0]).unwrap();

    let result = cut_domain(&given, &domain, &CutConfig::default()).unwrap();
    assert_eq!(result.face_count(), 1);
}

#[test]
fn output_model_uses_configured_vertex_tolerance() {
    let given = cube([0.0, 0.0, 0.0], 1.0);
    let knife = top_knife();
    let config = CutConfig {
        vertex_tolerance: 1e-3,
        ..CutConfig::default()
    };

    let result = cut(&given, &knife, &config).unwrap();
    assert_eq!(result.vertex_tolerance(), 1e-3);
    // The two top triangles are gone but all eight corners remain in use
    assert_eq!(result.vertex_count(), 8);
}
