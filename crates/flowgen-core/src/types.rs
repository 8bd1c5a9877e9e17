//! Source type references and target descriptive types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A type as written in the source declaration.
///
/// Exactly one variant per reference; composite variants own their inner
/// references, so a `TypeRef` is always a finite tree. Named references are
/// never expanded, which keeps self-referential declarations finite too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Predeclared kind (`int64`, `string`, `bool`, ...). Also carries the
    /// pseudo-kinds `interface`, `struct`, `func` and `chan` for type
    /// literals that have no name, and `generic` for the body of a
    /// declaration with type parameters.
    Primitive(String),
    /// Reference to a declaration by name.
    Named(String),
    Pointer(Box<TypeRef>),
    Slice(Box<TypeRef>),
    Array {
        /// Length expression as written (`16`, `N`, `...`).
        len: Option<String>,
        elem: Box<TypeRef>,
    },
    Map {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    /// Type owned by another package or the platform (`time.Time`,
    /// `C.struct_stat`). Never inspected structurally.
    Opaque { package: String, name: String },
}

impl TypeRef {
    pub fn primitive(name: &str) -> Self {
        Self::Primitive(name.to_owned())
    }

    pub fn named(name: &str) -> Self {
        Self::Named(name.to_owned())
    }

    pub fn pointer(inner: TypeRef) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeRef) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn array(len: Option<&str>, elem: TypeRef) -> Self {
        Self::Array {
            len: len.map(str::to_owned),
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn opaque(package: &str, name: &str) -> Self {
        Self::Opaque {
            package: package.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Strip every pointer layer: `**T` → `T`.
    pub fn pointee(&self) -> &TypeRef {
        let mut ty = self;
        while let Self::Pointer(inner) = ty {
            ty = inner;
        }
        ty
    }}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(name) | Self::Named(name) => f.write_str(name),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Slice(elem) => write!(f, "[]{elem}"),
            Self::Array { len, elem } => {
                write!(f, "[{}]{elem}", len.as_deref().unwrap_or(""))
            }
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Opaque { package, name } => write!(f, "{package}.{name}"),
        }
    }
}

/// A resolved type in the descriptive target notation.
///
/// Nullability is a flag on the type rather than a wrapper, so a doubly
/// nullable type cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DescType {
    pub kind: DescKind,
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescKind {
    Number,
    String,
    Boolean,
    /// Unstructured object (interfaces, inline structs, raw JSON).
    Object,
    /// Reference to another declaration by its emitted name.
    Named(String),
    /// External type with no structural representation; holds the source
    /// spelling (`C.struct_stat`).
    Opaque(String),
    Array(Box<DescType>),
    Map {
        key: Box<DescType>,
        value: Box<DescType>,
    },
    /// Override text trusted as-is.
    Verbatim(String),
}

impl DescType {
    pub fn new(kind: DescKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub fn number() -> Self {
        Self::new(DescKind::Number)
    }

    pub fn string() -> Self {
        Self::new(DescKind::String)
    }

    pub fn boolean() -> Self {
        Self::new(DescKind::Boolean)
    }

    pub fn object() -> Self {
        Self::new(DescKind::Object)
    }

    pub fn named(name: &str) -> Self {
        Self::new(DescKind::Named(name.to_owned()))
    }

    pub fn opaque(name: &str) -> Self {
        Self::new(DescKind::Opaque(name.to_owned()))
    }

    pub fn array(elem: DescType) -> Self {
        Self::new(DescKind::Array(Box::new(elem)))
    }

    pub fn map(key: DescType, value: DescType) -> Self {
        Self::new(DescKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Parse override text. A leading `?` marks the type nullable; the rest
    /// is kept verbatim.
    pub fn verbatim(text: &str) -> Self {
        let text = text.trim();
        match text.strip_prefix('?') {
            Some(rest) => Self::new(DescKind::Verbatim(rest.trim_start().to_owned())).nullable(),
            None => Self::new(DescKind::Verbatim(text.to_owned())),
        }
    }

    /// Mark nullable. Idempotent.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Apply `f` to every declaration name this type references.
    pub fn rename_refs(&mut self, f: &impl Fn(&str) -> Option<String>) {
        match &mut self.kind {
            DescKind::Named(name) => {
                if let Some(renamed) = f(name) {
                    *name = renamed;
                }
            }
            DescKind::Array(elem) => elem.rename_refs(f),
            DescKind::Map { key, value } => {
                key.rename_refs(f);
                value.rename_refs(f);
            }
            DescKind::Number
            | DescKind::String
            | DescKind::Boolean
            | DescKind::Object
            | DescKind::Opaque(_)
            | DescKind::Verbatim(_) => {}
        }
    }
}
