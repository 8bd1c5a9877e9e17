//! Flow type declaration output.
//!
//! Writes a `Catalogue` as a Flow module: an optional `@flow` header, then
//! one block per declaration separated by blank lines.

mod config;
mod emitter;
mod render;


pub use config::{Config, DO_NOT_EDIT};
pub use emitter::Emitter;

use crate::emit::Catalogue;

/// Render the catalogue as Flow source text.
pub fn emit(catalogue: &Catalogue, config: Config) -> String {
    Emitter::new(catalogue, config).emit()
}
