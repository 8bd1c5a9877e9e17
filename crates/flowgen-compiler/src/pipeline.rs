//! High-level translation facade.
//!
//! One `Translator` call is one isolated run: each stage completes before
//! the next starts, and the first error aborts the run.

use flowgen_core::{Model, SourceDecl};
use log::debug;

use crate::annotate::{ModelOptions, UntaggedFields, build_model};
use crate::emit::{Catalogue, emit};
use crate::error::Result;
use crate::extract::extract_all;
use crate::flatten::flatten;
use crate::mapper::Mapper;
use crate::resolve::{map_model, resolve};
use crate::source_map::SourceMap;
use crate::typegen::flow;

/// Builder for translation runs.
#[derive(Clone, Debug, Default)]
pub struct Translator {
    model: ModelOptions,
    flow: flow::Config,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore declarations whose names are not exported.
    pub fn exported_only(mut self, value: bool) -> Self {
        self.model = self.model.exported_only(value);
        self
    }

    pub fn untagged(mut self, value: UntaggedFields) -> Self {
        self.model = self.model.untagged(value);
        self
    }

    /// Set the Flow output configuration.
    pub fn flow_config(mut self, config: flow::Config) -> Self {
        self.flow = config;
        self
    }

    /// Build the type model.
    pub fn model(&self, decls: &[SourceDecl]) -> Result<Model> {
        Ok(build_model(decls, &self.model)?)
    }

    /// Run every stage up to emission.
    pub fn catalogue(&self, decls: &[SourceDecl]) -> Result<Catalogue> {
        let model = self.model(decls)?;
        catalogue(&model)
    }

    /// Translate declarations to Flow text.
    pub fn translate(&self, decls: &[SourceDecl]) -> Result<String> {
        let catalogue = self.catalogue(decls)?;
        Ok(flow::emit(&catalogue, self.flow.clone()))
    }

    /// Extract and translate every source of a run.
    pub fn translate_sources(&self, sources: &SourceMap) -> Result<String> {
        let decls = extract_all(sources)?;
        self.translate(&decls)
    }
}

/// Flatten, map, resolve and emit a built model.
pub fn catalogue(model: &Model) -> Result<Catalogue> {
    let flattened = flatten(model)?;
    let mapper = Mapper::new(model);
    let mapped = map_model(model, &flattened, mapper)?;
    let resolved = resolve(model, &mapped, mapper)?;
    debug!("resolved {} of {} declarations", resolved.len(), model.len());
    Ok(emit(resolved))
}
