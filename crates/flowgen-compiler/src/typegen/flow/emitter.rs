//! Core emitter struct and main emit logic.

use flowgen_core::Colors;

use super::Config;
use crate::emit::{BlockBody, Catalogue};

/// Flow emitter over a declaration catalogue.
pub struct Emitter<'a> {
    pub(super) catalogue: &'a Catalogue,
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(catalogue: &'a Catalogue, config: Config) -> Self {
        Self {
            catalogue,
            config,
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// Emit every declaration, in catalogue order.
    pub fn emit(mut self) -> String {
        if self.config.header {
            self.emit_header();
        }

        let catalogue = self.catalogue;
        for block in &catalogue.blocks {
            self.emit_doc("", &block.doc);
            match &block.body {
                BlockBody::Alias { target, opaque } => {
                    self.emit_type_decl(&block.name, target, *opaque)
                }
                BlockBody::Object { exact, fields } => {
                    self.emit_object(&block.name, *exact, fields)
                }
            }
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
