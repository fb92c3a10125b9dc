// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Removing faces that intersect a knife.
//!
//! [`cut`] keeps every face of the given model that intersects no face of a
//! knife model, using a [`CellGrid`] over the knife to find candidates.
//! [`cut_domain`] keeps every face none of whose vertices lie inside a knife
//! domain. A face that passes through the domain without a vertex inside it
//! survives the domain cut.
//!
//! Survivors are copied into a new model as fresh simplices. The inputs are
//! never modified.

use gmcut_geometry::{triangle_triangle_intersect, Dimension, KnifeDomain, Triangle};
use gmcut_model::{ElementType, Model};
use rayon::prelude::*;

use crate::config::CutConfig;
use crate::error::{Error, Result};
use crate::grid::CellGrid;

/// Removes from `given` every face that intersects a face of `knife`.
///
/// Both models must have the same model type. Only 3D models are
/// supported; a knife without faces is [`Error::DegenerateInput`].
pub fn cut(given: &Model, knife: &Model, config: &CutConfig) -> Result<Model> {
    if given.model_type() != knife.model_type() {
        return Err(Error::DimensionMismatch {
            given: given.model_type().as_str(),
            knife: knife.model_type().as_str(),
        });
    }
    if given.dimension() == Dimension::Two {
        return Err(Error::Unimplemented("cutting 2D models"));
    }

    let grid = CellGrid::build(knife, ElementType::Face, config)?;
    tracing::info!(
        given_faces = given.face_count(),
        knife_faces = knife.face_count(),
        cell_entries = grid.entry_count(),
        "Starting cut"
    );

    filter_faces(given, config, |triangle| {
        face_intersects_any(&grid, knife, triangle)
    })
}

/// Removes from `given` every face with a vertex inside `knife`.
pub fn cut_domain(given: &Model, knife: &dyn KnifeDomain, config: &CutConfig) -> Result<Model> {
    if given.dimension() != knife.dimension() {
        return Err(Error::DimensionMismatch {
            given: given.model_type().as_str(),
            knife: knife.dimension().as_str(),
        });
    }
    if given.dimension() == Dimension::Two {
        return Err(Error::Unimplemented("cutting 2D models by a domain"));
    }

    tracing::info!(given_faces = given.face_count(), "Starting domain cut");

    filter_faces(given, config, |triangle| {
        Ok(triangle.vertices().iter().any(|p| knife.contains(p)))
    })
}

/// Returns `true` as soon as one knife face listed in the cells overlapped
/// by `triangle`'s bounding box intersects it.
pub fn face_intersects_any(grid: &CellGrid, knife: &Model, triangle: &Triangle) -> Result<bool> {
    let range = grid.cells_in_box(&triangle.bounding_box());
    for (x, y, z) in range.cells() {
        for face in grid.cell_entries(x, y, z) {
            let candidate = knife.face_triangle(face)?;
            if triangle_triangle_intersect(triangle, &candidate) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Copies the faces of `given` for which `excluded` is `false` into a new
/// model of the same type, preserving face order.
fn filter_faces<F>(given: &Model, config: &CutConfig, excluded: F) -> Result<Model>
where
    F: Fn(&Triangle) -> Result<bool> + Sync,
{
    let vertices = given.vertex_count();
    let mut output = Model::with_capacity(
        given.model_type(),
        config.block_size_for(vertices),
        vertices.max(config.min_block_size),
        config.vertex_tolerance,
    );

    let scanned = given.face_count();
    if config.parallel {
        // PHASE 1: Extract every triangle up front
        let triangles = given
            .faces()
            .map(|(face, _)| given.face_triangle(face))
            .collect::<gmcut_model::Result<Vec<_>>>()?;

        // PHASE 2: Classify against the frozen knife; the first error wins
        let hits = triangles
            .par_iter()
            .map(|triangle| excluded(triangle))
            .collect::<Result<Vec<bool>>>()?;

        // PHASE 3: Single writer, in given face order
        for (triangle, hit) in triangles.iter().zip(hits) {
            if !hit {
                output.construct_simplex(triangle.vertices())?;
            }
        }
    } else {
        for (face, _) in given.faces() {
            let triangle = given.face_triangle(face)?;
            if !excluded(&triangle)? {
                output.construct_simplex(triangle.vertices())?;
            }
        }
    }

    let kept = output.face_count();
    tracing::info!(
        scanned,
        kept,
        excluded = scanned - kept,
        parallel = config.parallel,
        "Cut complete"
    );
    Ok(output)
}
