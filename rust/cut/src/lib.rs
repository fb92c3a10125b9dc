// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gmcut
//!
//! Spatial cell grids over triangulated models, and the cut that removes
//! from one model every face intersecting a knife model or knife domain.
//!
//! ## Example
//!
//! ```
//! use gmcut::{cut, CutConfig};
//! use gmcut_model::{Model, ModelType};
//! use nalgebra::Point3;
//!
//! let mut given = Model::new(ModelType::Model3D);
//! given
//!     .construct_simplex([
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ])
//!     .unwrap();
//!
//! let mut knife = Model::new(ModelType::Model3D);
//! knife
//!     .construct_simplex([
//!         Point3::new(5.0, 5.0, 5.0),
//!         Point3::new(6.0, 5.0, 5.0),
//!         Point3::new(5.0, 6.0, 5.0),
//!     ])
//!     .unwrap();
//!
//! let result = cut(&given, &knife, &CutConfig::default()).unwrap();
//! assert_eq!(result.face_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: the cell grid, its entry arena and the box-to-cell-range query
//! - [`cut`]: model and domain cuts
//! - [`request`]: builder for cuts with optional operands
//! - [`config`]: tolerances, block sizes and the parallel switch

pub mod config;
pub mod cut;
pub mod error;
pub mod grid;
pub mod request;

pub use config::CutConfig;
pub use cut::{cut, cut_domain, face_intersects_any};
pub use error::{Error, Result};
pub use grid::{cell_range, CellEntries, CellEntry, CellEntryArena, CellGrid};
pub use request::CutRequest;

// Re-export the element kind used to select grid contents
pub use gmcut_model::ElementType;
