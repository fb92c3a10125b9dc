// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh fixtures shared by the integration tests.

#![allow(dead_code)]

use std::f64::consts::PI;

use gmcut_model::{Model, ModelType};
use nalgebra::Point3;

/// Axis-aligned cube of 12 triangles with its minimum corner at `min`.
pub fn cube(min: [f64; 3], size: f64) -> Model {
    let mut model = Model::new(ModelType::Model3D);
    add_cube(&mut model, min, size);
    model
}

pub fn add_cube(model: &mut Model, min: [f64; 3], size: f64) {
    let [x0, y0, z0] = min;
    let (x1, y1, z1) = (x0 + size, y0 + size, z0 + size);
    let c = [
        Point3::new(x0, y0, z0),
        Point3::new(x1, y0, z0),
        Point3::new(x1, y1, z0),
        Point3::new(x0, y1, z0),
        Point3::new(x0, y0, z1),
        Point3::new(x1, y0, z1),
        Point3::new(x1, y1, z1),
        Point3::new(x0, y1, z1),
    ];
    let quads = [
        [0, 3, 2, 1], // bottom
        [4, 5, 6, 7], // top
        [0, 1, 5, 4], // front
        [1, 2, 6, 5], // right
        [2, 3, 7, 6], // back
        [3, 0, 4, 7], // left
    ];
    for [a, b, cc, d] in quads {
        model.construct_simplex([c[a], c[b], c[cc]]).unwrap();
        model.construct_simplex([c[a], c[cc], c[d]]).unwrap();
    }
}

/// Latitude/longitude sphere. Pole rows use one triangle per slice.
pub fn sphere(center: [f64; 3], radius: f64, stacks: usize, slices: usize) -> Model {
    let mut model = Model::new(ModelType::Model3D);
    let point = |i: usize, j: usize| {
        let theta = PI * i as f64 / stacks as f64;
        let phi = 2.0 * PI * (j % slices) as f64 / slices as f64;
        Point3::new(
            center[0] + radius * theta.sin() * phi.cos(),
            center[1] + radius * theta.sin() * phi.sin(),
            center[2] + radius * theta.cos(),
        )
    };

    for i in 0..stacks {
        for j in 0..slices {
            let (a, b, c, d) = (point(i, j), point(i, j + 1), point(i + 1, j + 1), point(i + 1, j));
            if i == 0 {
                model.construct_simplex([a, c, d]).unwrap();
            } else if i + 1 == stacks {
                model.construct_simplex([a, b, c]).unwrap();
            } else {
                model.construct_simplex([a, b, c]).unwrap();
                model.construct_simplex([a, c, d]).unwrap();
            }
        }
    }
    model
}

/// Flat `n` by `n` sheet of triangles in the plane `z`, spanning
/// `[0, size]` on x and y.
pub fn sheet(n: usize, size: f64, z: f64) -> Model {
    let mut model = Model::new(ModelType::Model3D);
    let step = size / n as f64;
    for i in 0..n {
        for j in 0..n {
            let (x0, y0) = (i as f64 * step, j as f64 * step);
            let (x1, y1) = (x0 + step, y0 + step);
            model
                .construct_simplex([
                    Point3::new(x0, y0, z),
                    Point3::new(x1, y0, z),
                    Point3::new(x1, y1, z),
                ])
                .unwrap();
            model
                .construct_simplex([
                    Point3::new(x0, y0, z),
                    Point3::new(x1, y1, z),
                    Point3::new(x0, y1, z),
                ])
                .unwrap();
        }
    }
    model
}

/// Model holding one triangle.
pub fn triangle(points: [[f64; 3]; 3]) -> Model {
    let mut model = Model::new(ModelType::Model3D);
    model.construct_simplex(points.map(Point3::from)).unwrap();
    model
}

/// Face triangles of a model, in face order.
pub fn face_points(model: &Model) -> Vec<[Point3<f64>; 3]> {
    model
        .faces()
        .map(|(face, _)| model.face_vertices(face).unwrap())
        .collect()
}
