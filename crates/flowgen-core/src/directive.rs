//! Parsed annotation directives.

use std::fmt;

use serde::Serialize;

/// An explicit instruction attached to a declaration or field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    /// Drop the entity from the emitted output.
    Ignore,
    /// Replace the mapped type with the given text, unchanged.
    Retype(String),
    /// Change the emitted name, never the position.
    Rename(String),
    /// Replace the carried documentation.
    Comment(String),
    /// Emit a closed shape that forbids extra properties.
    Strict,
}

/// Directive kinds in application precedence (highest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveKind {
    Ignore,
    Retype,
    Rename,
    Comment,
    Strict,
}

impl Directive {
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Ignore => DirectiveKind::Ignore,
            Self::Retype(_) => DirectiveKind::Retype,
            Self::Rename(_) => DirectiveKind::Rename,
            Self::Comment(_) => DirectiveKind::Comment,
            Self::Strict => DirectiveKind::Strict,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Retype(text) | Self::Rename(text) | Self::Comment(text) => Some(text),
            Self::Ignore | Self::Strict => None,
        }
    }
}

impl DirectiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Retype => "retype",
            Self::Rename => "rename",
            Self::Comment => "comment",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(payload) => write!(f, "@{} {}", self.kind(), payload),
            None => write!(f, "@{}", self.kind()),
        }
    }
}

/// Directive set of one entity: at most one directive per kind, kept in
/// precedence order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Directives(Vec<Directive>);

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive.
    ///
    /// An exact duplicate is absorbed. A different directive of the same kind
    /// is rejected and the already present one is returned.
    pub fn insert(&mut self, directive: Directive) -> Result<(), &Directive> {
        let kind = directive.kind();
        match self.0.binary_search_by_key(&kind, Directive::kind) {
            Ok(idx) if self.0[idx] == directive => Ok(()),
            Ok(idx) => Err(&self.0[idx]),
            Err(idx) => {
                self.0.insert(idx, directive);
                Ok(())
            }
        }
    }

    pub fn get(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.0.iter().find(|d| d.kind() == kind)
    }

    pub fn is_ignored(&self) -> bool {
        self.get(DirectiveKind::Ignore).is_some()
    }

    pub fn is_strict(&self) -> bool {
        self.get(DirectiveKind::Strict).is_some()
    }

    pub fn retype(&self) -> Option<&str> {
        self.get(DirectiveKind::Retype).and_then(Directive::payload)
    }

    pub fn rename(&self) -> Option<&str> {
        self.get(DirectiveKind::Rename).and_then(Directive::payload)
    }

    pub fn comment(&self) -> Option<&str> {
        self.get(DirectiveKind::Comment).and_then(Directive::payload)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Directives {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
