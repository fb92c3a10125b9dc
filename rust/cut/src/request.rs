// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for cut calls assembled from optional parts.

use gmcut_geometry::KnifeDomain;
use gmcut_model::Model;

use crate::config::CutConfig;
use crate::cut::{cut, cut_domain};
use crate::error::{Error, Result};

#[derive(Clone, Copy)]
enum Knife<'a> {
    Model(&'a Model),
    Domain(&'a dyn KnifeDomain),
}

/// A cut whose operands are supplied one at a time.
///
/// Running a request with an operand missing reports
/// [`Error::MissingInput`] instead of producing a model.
///
/// # Example
///
/// ```
/// use gmcut::{CutRequest, Error};
/// use gmcut_model::{Model, ModelType};
///
/// let given = Model::new(ModelType::Model3D);
/// let result = CutRequest::new().given(&given).run();
/// assert!(matches!(result, Err(Error::MissingInput(_))));
/// ```
#[derive(Clone, Default)]
pub struct CutRequest<'a> {
    given: Option<&'a Model>,
    knife: Option<Knife<'a>>,
    config: CutConfig,
}

impl<'a> CutRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The model to cut.
    pub fn given(mut self, model: &'a Model) -> Self {
        self.given = Some(model);
        self
    }

    /// Cut by a knife model. Replaces any knife set before.
    pub fn knife(mut self, model: &'a Model) -> Self {
        self.knife = Some(Knife::Model(model));
        self
    }

    /// Cut by a knife domain. Replaces any knife set before.
    pub fn knife_domain(mut self, domain: &'a dyn KnifeDomain) -> Self {
        self.knife = Some(Knife::Domain(domain));
        self
    }

    pub fn config(mut self, config: CutConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the cut.
    pub fn run(&self) -> Result<Model> {
        let given = self.given.ok_or(Error::MissingInput("given model"))?;
        match self.knife {
            Some(Knife::Model(knife)) => cut(given, knife, &self.config),
            Some(Knife::Domain(domain)) => cut_domain(given, domain, &self.config),
            None => Err(Error::MissingInput("knife model or domain")),
        }
    }
}

impl std::fmt::Debug for CutRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let knife = match self.knife {
            Some(Knife::Model(_)) => "model",
            Some(Knife::Domain(_)) => "domain",
            None => "none",
        };
        f.debug_struct("CutRequest")
            .field("given", &self.given.is_some())
            .field("knife", &knife)
            .field("config", &self.config)
            .finish()
    }
}
