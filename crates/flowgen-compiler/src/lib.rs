//! Flowgen compiler: Go struct declarations to Flow type declarations.
//!
//! The translation pipeline, in order:
//! - `extract` - Go lexer and declaration parser producing `SourceDecl`s
//! - `annotate` - tag and directive parsing, builds the type `Model`
//! - `flatten` - resolves embedding into flat, ordered field lists
//! - `mapper` - maps source types to Flow types
//! - `resolve` - applies rename/retype/ignore/comment/strict directives
//! - `emit` - produces the ordered declaration catalogue
//! - `typegen` - renders the catalogue as Flow text
//! - `pipeline` - the `Translator` facade tying the stages together
//! - `diagnostics` - error rendering with source snippets

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod annotate;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod mapper;
pub mod pipeline;
pub mod resolve;
pub mod source_map;
pub mod typegen;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod flatten_tests;
#[cfg(test)]
mod mapper_tests;
#[cfg(test)]
mod pipeline_tests;

pub use annotate::{ModelOptions, UntaggedFields};
pub use diagnostics::DiagnosticsPrinter;
pub use emit::{BlockBody, Catalogue, DeclarationBlock, FieldLine};
pub use error::{Error, Location, MappingError, Result, StructuralError, SyntaxError};
pub use pipeline::Translator;
pub use source_map::{SourceId, SourceMap, Span};
