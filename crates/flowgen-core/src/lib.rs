#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type model for the flowgen translator.
//!
//! Three layers:
//! - **Input layer** (`source`): declarations as handed over by a source
//!   parser, annotations still raw text
//! - **Model layer** (`model`, `directive`): parsed directives, embedding
//!   references, the pipeline-scoped registry
//! - **Target layer** (`types::DescType`): descriptive types with explicit
//!   nullability, produced by the mapper and consumed by the emitter

pub mod colors;
pub mod directive;
pub mod model;
pub mod source;
pub mod types;
pub mod utils;


pub use colors::Colors;
pub use directive::{Directive, DirectiveKind, Directives};
pub use model::{Decl, Embed, Field, Member, Model, NamedType, StructDef};
pub use source::{SourceBody, SourceDecl, SourceField};
pub use types::{DescKind, DescType, TypeRef};
