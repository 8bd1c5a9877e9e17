//! Declarations as supplied by a source parser.
//!
//! These records are the boundary between source reading and translation.
//! Annotations are still raw: documentation is plain text lines, field tags
//! are the unparsed tag string.

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDecl {
    pub name: String,
    /// Leading documentation, one entry per line, comment markers removed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc: Vec<String>,
    pub body: SourceBody,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceBody {
    /// Struct type with fields in declaration order.
    Struct(Vec<SourceField>),
    /// Any non-struct named type (`type Cmd uint32`, `type People []Person`).
    Alias(TypeRef),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceField {
    /// Field identifier. `None` for an embedded field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ty: TypeRef,
    /// Raw tag contents without the surrounding quotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc: Vec<String>,
    /// Trailing same-line comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SourceDecl {
    pub fn new_struct(name: &str, fields: Vec<SourceField>) -> Self {
        Self {
            name: name.to_owned(),
            doc: Vec::new(),
            body: SourceBody::Struct(fields),
        }
    }

    pub fn new_alias(name: &str, target: TypeRef) -> Self {
        Self {
            name: name.to_owned(),
            doc: Vec::new(),
            body: SourceBody::Alias(target),
        }
    }

    pub fn with_doc(mut self, lines: &[&str]) -> Self {
        self.doc = lines.iter().map(|l| (*l).to_owned()).collect();
        self
    }
}

impl SourceField {
    pub fn named(name: &str, ty: TypeRef) -> Self {
        Self {
            name: Some(name.to_owned()),
            ty,
            tag: None,
            doc: Vec::new(),
            comment: None,
        }
    }

    pub fn embedded(ty: TypeRef) -> Self {
        Self {
            name: None,
            ty,
            tag: None,
            doc: Vec::new(),
            comment: None,
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_owned());
        self
    }

    pub fn with_doc(mut self, lines: &[&str]) -> Self {
        self.doc = lines.iter().map(|l| (*l).to_owned()).collect();
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_owned());
        self
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_none()
    }
}

/// Read declarations from their JSON form (as written by [`to_json`]).
pub fn from_json(json: &str) -> Result<Vec<SourceDecl>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Pretty-printed JSON form of a declaration list.
pub fn to_json(decls: &[SourceDecl]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(decls)
}
