//! The type model: declarations with parsed directives.
//!
//! Built once per translation run from `SourceDecl`s. Later stages derive new
//! views from it and never modify it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::directive::Directives;
use crate::types::TypeRef;

/// A struct field after tag and documentation parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Wire name: the json tag name, or the identifier when untagged.
    pub name: String,
    /// Identifier as declared in the source. Used to locate errors.
    pub ident: String,
    pub ty: TypeRef,
    /// May be absent from the serialized object (`omitempty`).
    pub optional: bool,
    pub doc: Vec<String>,
    pub comment: Option<String>,
    pub directives: Directives,
}

impl Field {
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_owned(),
            ident: name.to_owned(),
            ty,
            optional: false,
            doc: Vec::new(),
            comment: None,
            directives: Directives::new(),
        }
    }
}

/// Embedding reference to another struct, by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub name: String,
}

/// One entry of a struct body, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Member {
    Field(Field),
    Embed(Embed),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructDef {
    pub name: String,
    pub doc: Vec<String>,
    pub members: Vec<Member>,
    pub directives: Directives,
}

impl StructDef {
    /// Whether the emitted shape forbids extra properties.
    pub fn is_strict(&self) -> bool {
        self.directives.is_strict()
    }

    /// Own fields, skipping embedding references.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            Member::Embed(_) => None,
        })
    }

    pub fn embeds(&self) -> impl Iterator<Item = &Embed> {
        self.members.iter().filter_map(|m| match m {
            Member::Embed(e) => Some(e),
            Member::Field(_) => None,
        })
    }
}

/// Non-struct named type: `type Cmd = number`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedType {
    pub name: String,
    pub doc: Vec<String>,
    pub target: TypeRef,
    pub directives: Directives,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decl {
    Struct(StructDef),
    Named(NamedType),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(s) => &s.name,
            Self::Named(n) => &n.name,
        }
    }

    pub fn doc(&self) -> &[String] {
        match self {
            Self::Struct(s) => &s.doc,
            Self::Named(n) => &n.doc,
        }
    }

    pub fn directives(&self) -> &Directives {
        match self {
            Self::Struct(s) => &s.directives,
            Self::Named(n) => &n.directives,
        }
    }

    pub fn as_struct(&self) -> Option<&StructDef> {
        match self {
            Self::Struct(s) => Some(s),
            Self::Named(_) => None,
        }
    }
}

/// Registry of every declaration in one translation run.
///
/// Names are unique across structs and named types. Iteration follows
/// insertion (source) order; emission ordering is the emitter's concern.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Model {
    decls: IndexMap<String, Decl>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration.
    ///
    /// A name that is already taken is rejected and the declaration handed
    /// back unchanged.
    pub fn insert(&mut self, decl: Decl) -> Result<(), Decl> {
        if self.decls.contains_key(decl.name()) {
            return Err(decl);
        }
        self.decls.insert(decl.name().to_owned(), decl);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decls.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Decl> {
        self.decls.get(name)
    }

    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        self.decls.get(name).and_then(Decl::as_struct)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterate over declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Decl> {
        self.decls.values()
    }}
