//! Error types of the translation pipeline.
//!
//! Every error is fatal for the run: no partial output is produced.

use std::fmt;

use flowgen_core::DirectiveKind;

use crate::source_map::{SourceId, Span};

/// Where in the model an error was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub decl: String,
    /// Source identifier of the field, if the error concerns one.
    pub field: Option<String>,
}

impl Location {
    pub fn decl(decl: &str) -> Self {
        Self {
            decl: decl.to_owned(),
            field: None,
        }
    }

    pub fn field(decl: &str, field: &str) -> Self {
        Self {
            decl: decl.to_owned(),
            field: Some(field.to_owned()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}", self.decl, field),
            None => f.write_str(&self.decl),
        }
    }
}

/// Malformed Go source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub source_id: SourceId,
    pub span: Span,
    pub message: String,
}

impl SyntaxError {
    pub fn new(source_id: SourceId, span: Span, message: impl Into<String>) -> Self {
        Self {
            source_id,
            span,
            message: message.into(),
        }
    }
}

/// The declarations are well-formed Go but cannot form a consistent model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("duplicate declaration `{name}`")]
    DuplicateDeclaration { name: String },

    /// The path starts and ends with the same struct.
    #[error("embedding cycle: {}", .path.join(" -> "))]
    EmbeddingCycle { path: Vec<String> },

    #[error("{location}: conflicting directives `{first}` and `{second}`")]
    ConflictingDirective {
        location: Location,
        first: String,
        second: String,
    },

    #[error("{location}: `@{kind}` is not allowed on {target}")]
    MisplacedDirective {
        location: Location,
        kind: DirectiveKind,
        target: &'static str,
    },

    #[error("{location}: malformed directive: {message}")]
    MalformedDirective { location: Location, message: String },

    #[error("{location}: embedded type `{name}` is not a struct declaration")]
    UnknownEmbed { location: Location, name: String },

    /// Two emitted fields of one object share a name.
    #[error("{location}: duplicate field `{name}`")]
    DuplicateField { location: Location, name: String },
}

/// A source type has no counterpart in the target notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("{location}: no Flow type for `{ty}`")]
    UnmappedPrimitive { location: Location, ty: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
