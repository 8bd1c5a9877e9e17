//! Declaration emission.
//!
//! Turns resolved declarations into the ordered catalogue handed to a
//! renderer: blocks sorted case-sensitively by emitted name, field lines in
//! flattened order with their type already written in Flow notation.

use flowgen_core::utils::property_key;
use flowgen_core::{DescKind, DescType};
use log::debug;

use crate::resolve::{ResolvedBody, ResolvedDecl};

/// Ordered declaration blocks of one translation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalogue {
    pub blocks: Vec<DeclarationBlock>,
}

impl Catalogue {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationBlock {
    pub name: String,
    /// Leading documentation, one entry per line.
    pub doc: Vec<String>,
    pub body: BlockBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockBody {
    /// `type Name = target`, or `opaque type Name = target`.
    Alias { target: String, opaque: bool },
    /// Object shape; `exact` shapes forbid extra properties.
    Object { exact: bool, fields: Vec<FieldLine> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLine {
    /// Property key, quoted when it is not an identifier.
    pub name: String,
    pub optional: bool,
    pub ty: String,
    pub doc: Vec<String>,
    pub comment: Option<String>,
}

impl DeclarationBlock {
    /// Field lines of an object block; empty for aliases.
    pub fn fields(&self) -> &[FieldLine] {
        match &self.body {
            BlockBody::Object { fields, .. } => fields,
            BlockBody::Alias { .. } => &[],
        }
    }
}

/// Build the catalogue. Names must already be unique.
pub fn emit(decls: Vec<ResolvedDecl>) -> Catalogue {
    let mut blocks: Vec<DeclarationBlock> = decls.into_iter().map(block).collect();
    blocks.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("emitted {} declarations", blocks.len());
    Catalogue { blocks }
}

fn block(decl: ResolvedDecl) -> DeclarationBlock {
    let body = match decl.body {
        ResolvedBody::Alias(ty) => BlockBody::Alias {
            target: type_text(&ty),
            opaque: false,
        },
        ResolvedBody::Opaque => BlockBody::Alias {
            target: "mixed".to_owned(),
            opaque: true,
        },
        ResolvedBody::Object { exact, fields } => BlockBody::Object {
            exact,
            fields: fields
                .into_iter()
                .map(|f| FieldLine {
                    name: property_key(&f.name),
                    optional: f.optional,
                    ty: type_text(&f.ty),
                    doc: f.doc,
                    comment: f.comment,
                })
                .collect(),
        },
    };
    DeclarationBlock {
        name: decl.name,
        doc: decl.doc,
        body,
    }
}

/// Flow notation of a type.
pub fn type_text(ty: &DescType) -> String {
    let text = match &ty.kind {
        DescKind::Number => "number".to_owned(),
        DescKind::String => "string".to_owned(),
        DescKind::Boolean => "boolean".to_owned(),
        DescKind::Object => "Object".to_owned(),
        DescKind::Named(name) => name.clone(),
        DescKind::Opaque(_) => "mixed".to_owned(),
        DescKind::Array(elem) => format!("Array<{}>", type_text(elem)),
        DescKind::Map { key, value } => {
            format!("{{ [key: {}]: {} }}", type_text(key), type_text(value))
        }
        DescKind::Verbatim(text) => text.clone(),
    };
    if ty.nullable {
        format!("?{text}")
    } else {
        text
    }
}
