//! Model building: tags and documentation directives.
//!
//! Interprets the raw annotations of `SourceDecl`s and registers the result
//! in a `Model`. After this stage every name, optional flag and directive is
//! final; later stages only derive views from the model.

mod directive;
mod tag;

#[cfg(test)]
mod tag_tests;

use flowgen_core::utils::is_exported;
use flowgen_core::{
    Decl, Directive, DirectiveKind, Directives, Embed, Field, Member, Model, NamedType,
    SourceBody, SourceDecl, SourceField, StructDef, TypeRef,
};
use log::{debug, trace};

use crate::error::{Location, StructuralError};

pub use directive::{ParsedDoc, parse_doc, parse_line};
pub use tag::{JsonTag, flow_directives, lookup};

/// What to do with exported fields that carry no `json` tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UntaggedFields {
    /// Leave them out of the model.
    #[default]
    Skip,
    /// Keep them under their Go identifier, as `encoding/json` does.
    UseIdent,
}

/// Options for building the model.
#[derive(Clone, Debug, Default)]
pub struct ModelOptions {
    pub exported_only: bool,
    pub untagged: UntaggedFields,
}

impl ModelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark declarations with unexported names as ignored.
    pub fn exported_only(mut self, value: bool) -> Self {
        self.exported_only = value;
        self
    }

    pub fn untagged(mut self, value: UntaggedFields) -> Self {
        self.untagged = value;
        self
    }
}

/// Build the model of one translation run.
pub fn build_model(decls: &[SourceDecl], options: &ModelOptions) -> Result<Model, StructuralError> {
    let mut model = Model::new();
    for source in decls {
        let decl = build_decl(source, options)?;
        if let Err(rejected) = model.insert(decl) {
            return Err(StructuralError::DuplicateDeclaration {
                name: rejected.name().to_owned(),
            });
        }
    }
    debug!("built model with {} declarations", model.len());
    Ok(model)
}

fn build_decl(source: &SourceDecl, options: &ModelOptions) -> Result<Decl, StructuralError> {
    let location = Location::decl(&source.name);
    let (doc, mut directives) = parse_annotations(&source.doc, &location)?;

    if options.exported_only && !is_exported(&source.name) {
        trace!("{}: not exported, ignored", source.name);
        add_directive(&mut directives, Directive::Ignore, &location)?;
    }

    match &source.body {
        SourceBody::Struct(fields) => {
            let mut members = Vec::with_capacity(fields.len());
            for field in fields {
                if let Some(member) = build_member(&source.name, field, options)? {
                    members.push(member);
                }
            }
            Ok(Decl::Struct(StructDef {
                name: source.name.clone(),
                doc,
                members,
                directives,
            }))
        }
        SourceBody::Alias(target) => {
            reject_strict(&directives, &location, "a named type")?;
            Ok(Decl::Named(NamedType {
                name: source.name.clone(),
                doc,
                target: target.clone(),
                directives,
            }))
        }
    }
}

fn build_member(
    decl: &str,
    source: &SourceField,
    options: &ModelOptions,
) -> Result<Option<Member>, StructuralError> {
    let tag = source.tag.as_deref().unwrap_or("");
    let json = lookup(tag, "json").map(|value| JsonTag::parse(&value));

    let ident = match &source.name {
        Some(name) => name.clone(),
        None => match &json {
            Some(json) if json.skip => return Ok(None),
            // Named embedded fields behave like ordinary fields.
            Some(json) if json.name.is_some() => embedded_ident(&source.ty),
            _ => return embed_member(decl, &source.ty).map(Some),
        },
    };

    if !is_exported(&ident) {
        return Ok(None);
    }

    let json = match json {
        Some(json) => json,
        None if options.untagged == UntaggedFields::UseIdent => JsonTag::default(),
        None => {
            trace!("{decl}.{ident}: no json tag, skipped");
            return Ok(None);
        }
    };

    let location = Location::field(decl, &ident);
    let (doc, mut directives) = parse_annotations(&source.doc, &location)?;
    reject_strict(&directives, &location, "a field")?;

    if json.skip {
        add_directive(&mut directives, Directive::Ignore, &location)?;
    }
    if let Some(flow) = lookup(tag, "flow") {
        for directive in flow_directives(&flow) {
            add_directive(&mut directives, directive, &location)?;
        }
    }

    Ok(Some(Member::Field(Field {
        name: json.name.unwrap_or_else(|| ident.clone()),
        ident,
        ty: source.ty.clone(),
        optional: json.omit_empty,
        doc,
        comment: source.comment.clone(),
        directives,
    })))
}

/// Embedding reference for an untagged embedded field.
///
/// Only declarations of this run can be inlined.
fn embed_member(decl: &str, ty: &TypeRef) -> Result<Member, StructuralError> {
    match ty.pointee() {
        TypeRef::Named(name) => Ok(Member::Embed(Embed { name: name.clone() })),
        other => Err(StructuralError::UnknownEmbed {
            location: Location::field(decl, &embedded_ident(ty)),
            name: other.to_string(),
        }),
    }
}

/// Identifier Go gives an embedded field: the unqualified type name.
fn embedded_ident(ty: &TypeRef) -> String {
    match ty.pointee() {
        TypeRef::Named(name) | TypeRef::Primitive(name) => name.clone(),
        TypeRef::Opaque { name, .. } => name.clone(),
        other => other.to_string(),
    }
}

fn parse_annotations(
    lines: &[String],
    location: &Location,
) -> Result<(Vec<String>, Directives), StructuralError> {
    let parsed = parse_doc(lines).map_err(|message| StructuralError::MalformedDirective {
        location: location.clone(),
        message,
    })?;
    let mut directives = Directives::new();
    for directive in parsed.directives {
        add_directive(&mut directives, directive, location)?;
    }
    Ok((trim_blank(parsed.text), directives))
}

fn add_directive(
    directives: &mut Directives,
    directive: Directive,
    location: &Location,
) -> Result<(), StructuralError> {
    trace!("{location}: {directive}");
    let second = directive.to_string();
    directives
        .insert(directive)
        .map_err(|first| StructuralError::ConflictingDirective {
            location: location.clone(),
            first: first.to_string(),
            second,
        })
}

fn reject_strict(
    directives: &Directives,
    location: &Location,
    target: &'static str,
) -> Result<(), StructuralError> {
    if directives.is_strict() {
        return Err(StructuralError::MisplacedDirective {
            location: location.clone(),
            kind: DirectiveKind::Strict,
            target,
        });
    }
    Ok(())
}

fn trim_blank(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.trim().is_empty()).count();
    lines.drain(..leading);
    lines
}
