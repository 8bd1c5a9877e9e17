//! Struct tag parsing.
//!
//! Tags follow the `reflect.StructTag` convention: space separated
//! `key:"value"` pairs where each value is an interpreted Go string.

use flowgen_core::Directive;

use crate::extract::unquote;

/// Value of `key` in a struct tag, unquoted.
///
/// Scanning stops at the first malformed pair, like `reflect.StructTag`.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    let mut rest = tag.as_bytes();
    loop {
        let skip = rest.iter().take_while(|&&b| b == b' ').count();
        rest = &rest[skip..];
        if rest.is_empty() {
            return None;
        }

        let name_len = rest
            .iter()
            .take_while(|&&b| b > b' ' && b != b':' && b != b'"' && b != 0x7f)
            .count();
        if name_len == 0
            || name_len + 1 >= rest.len()
            || rest[name_len] != b':'
            || rest[name_len + 1] != b'"'
        {
            return None;
        }
        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        let mut end = 1;
        while end < rest.len() && rest[end] != b'"' {
            if rest[end] == b'\\' {
                end += 1;
            }
            end += 1;
        }
        if end >= rest.len() {
            return None;
        }
        let quoted = &rest[..=end];
        rest = &rest[end + 1..];

        if name == key.as_bytes() {
            return std::str::from_utf8(quoted).ok().and_then(unquote);
        }
    }
}

/// The `json` tag of a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonTag {
    /// Explicit wire name; `None` keeps the identifier.
    pub name: Option<String>,
    pub omit_empty: bool,
    /// `json:"-"`: never serialized.
    pub skip: bool,
}

impl JsonTag {
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            return Self {
                skip: true,
                ..Self::default()
            };
        }
        let mut parts = value.split(',');
        let name = parts.next().filter(|n| !n.is_empty()).map(str::to_owned);
        let omit_empty = parts.any(|opt| opt == "omitempty");
        Self {
            name,
            omit_empty,
            skip: false,
        }
    }
}

/// Directives carried by a `flow` tag.
///
/// `flow:"name.Type"` renames and retypes, `flow:".Type"` only retypes,
/// `flow:"name"` and `flow:"name."` only rename, `flow:"-"` ignores.
pub fn flow_directives(value: &str) -> Vec<Directive> {
    if value == "-" {
        return vec![Directive::Ignore];
    }
    let (name, ty) = value.split_once('.').unwrap_or((value, ""));
    let mut directives = Vec::new();
    if !name.is_empty() {
        directives.push(Directive::Rename(name.to_owned()));
    }
    if !ty.is_empty() {
        directives.push(Directive::Retype(ty.to_owned()));
    }
    directives
}
