//! Override resolution.
//!
//! Applies directives to the mapped model, highest precedence first:
//! `ignore` drops the entity, `retype` replaces the mapped type with its
//! verbatim text, `rename` changes the emitted name, `comment` replaces the
//! documentation. `strict` closes the shape of a struct declaration.
//!
//! Renamed declarations are renamed at every reference too. Two fields of
//! one object may not end up under the same name.

use std::collections::{HashMap, HashSet};

use flowgen_core::{Decl, DescKind, DescType, Directives, Model};
use log::trace;

use crate::error::{Location, Result, StructuralError};
use crate::flatten::{FlatField, Flattened};
use crate::mapper::Mapper;

/// Field types mapped ahead of resolution.
///
/// Fields and declarations carrying `ignore` or `retype` are not mapped:
/// their source type never reaches the output.
#[derive(Debug, Default)]
pub struct Mapped<'m> {
    structs: HashMap<&'m str, Vec<MappedField<'m>>>,
    named: HashMap<&'m str, DescType>,
}

#[derive(Clone, Debug)]
pub struct MappedField<'m> {
    pub flat: FlatField<'m>,
    pub ty: Option<DescType>,
}

impl<'m> Mapped<'m> {
    pub fn fields(&self, decl: &str) -> &[MappedField<'m>] {
        self.structs.get(decl).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn named(&self, decl: &str) -> Option<&DescType> {
        self.named.get(decl)
    }
}

/// Map every field of the flattened model and every named type target.
pub fn map_model<'m>(
    model: &'m Model,
    flattened: &Flattened<'m>,
    mapper: Mapper<'_>,
) -> Result<Mapped<'m>> {
    let mut mapped = Mapped::default();

    for (name, fields) in flattened.iter() {
        if model.get(name).is_some_and(|d| skips_mapping(d.directives())) {
            continue;
        }
        let mut out = Vec::with_capacity(fields.len());
        for flat in fields {
            let ty = if skips_mapping(&flat.field.directives) {
                None
            } else {
                Some(mapper.map(&flat.field.ty, &flat.location())?)
            };
            out.push(MappedField { flat: *flat, ty });
        }
        mapped.structs.insert(name, out);
    }

    for decl in model.iter() {
        if let Decl::Named(named) = decl {
            if !skips_mapping(&named.directives) {
                let ty = mapper.map(&named.target, &Location::decl(&named.name))?;
                mapped.named.insert(named.name.as_str(), ty);
            }
        }
    }
    Ok(mapped)
}

fn skips_mapping(directives: &Directives) -> bool {
    directives.is_ignored() || directives.retype().is_some()
}

/// A declaration with every directive applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDecl {
    /// Emitted name.
    pub name: String,
    pub doc: Vec<String>,
    pub body: ResolvedBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedBody {
    Alias(DescType),
    /// External type without structure.
    Opaque,
    Object {
        exact: bool,
        fields: Vec<ResolvedField>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub optional: bool,
    pub ty: DescType,
    pub doc: Vec<String>,
    pub comment: Option<String>,
}

/// Apply directives to every declaration, in model order.
///
/// `mapper` maps anything the mapping pass left out.
pub fn resolve(model: &Model, mapped: &Mapped<'_>, mapper: Mapper<'_>) -> Result<Vec<ResolvedDecl>> {
    let mut resolved = Vec::new();
    let mut renames: HashMap<&str, &str> = HashMap::new();

    for decl in model.iter() {
        let directives = decl.directives();
        if directives.is_ignored() {
            trace!("{}: ignored", decl.name());
            continue;
        }

        let name = directives.rename().unwrap_or(decl.name());
        if name != decl.name() {
            trace!("{}: renamed to {name}", decl.name());
            renames.insert(decl.name(), name);
        }
        let doc = match directives.comment() {
            Some(text) => vec![text.to_owned()],
            None => decl.doc().to_vec(),
        };

        let body = match decl {
            Decl::Named(named) => match directives.retype() {
                Some(text) => ResolvedBody::Alias(DescType::verbatim(text)),
                None => {
                    let ty = match mapped.named(&named.name) {
                        Some(ty) => ty.clone(),
                        None => mapper.map(&named.target, &Location::decl(&named.name))?,
                    };
                    match ty.kind {
                        DescKind::Opaque(_) if !ty.nullable => ResolvedBody::Opaque,
                        _ => ResolvedBody::Alias(ty),
                    }
                }
            },
            Decl::Struct(def) => match directives.retype() {
                Some(text) => ResolvedBody::Alias(DescType::verbatim(text)),
                None => {
                    let mut fields: Vec<ResolvedField> = Vec::new();
                    let mut seen = HashSet::new();
                    for entry in mapped.fields(&def.name) {
                        let Some(field) = resolve_field(entry, mapper)? else {
                            continue;
                        };
                        if !seen.insert(field.name.clone()) {
                            return Err(StructuralError::DuplicateField {
                                location: entry.flat.location(),
                                name: field.name,
                            }
                            .into());
                        }
                        fields.push(field);
                    }
                    ResolvedBody::Object {
                        exact: def.is_strict(),
                        fields,
                    }
                }
            },
        };

        resolved.push(ResolvedDecl {
            name: name.to_owned(),
            doc,
            body,
        });
    }

    check_unique_names(&resolved)?;
    if !renames.is_empty() {
        let rename = |name: &str| renames.get(name).map(|n| (*n).to_owned());
        for decl in &mut resolved {
            match &mut decl.body {
                ResolvedBody::Alias(ty) => ty.rename_refs(&rename),
                ResolvedBody::Object { fields, .. } => {
                    for field in fields {
                        field.ty.rename_refs(&rename);
                    }
                }
                ResolvedBody::Opaque => {}
            }
        }
    }
    Ok(resolved)
}

fn resolve_field(entry: &MappedField<'_>, mapper: Mapper<'_>) -> Result<Option<ResolvedField>> {
    let field = entry.flat.field;
    let directives = &field.directives;
    if directives.is_ignored() {
        trace!("{}: ignored", entry.flat.location());
        return Ok(None);
    }

    let ty = match (directives.retype(), &entry.ty) {
        (Some(text), _) => DescType::verbatim(text),
        (None, Some(ty)) => ty.clone(),
        (None, None) => mapper.map(&field.ty, &entry.flat.location())?,
    };

    // A comment override replaces the trailing comment when there is one,
    // the leading block otherwise.
    let (doc, comment) = match (directives.comment(), &field.comment) {
        (Some(text), Some(_)) => (field.doc.clone(), Some(text.to_owned())),
        (Some(text), None) => (vec![text.to_owned()], None),
        (None, comment) => (field.doc.clone(), comment.clone()),
    };

    Ok(Some(ResolvedField {
        name: directives.rename().unwrap_or(&field.name).to_owned(),
        optional: field.optional,
        ty,
        doc,
        comment,
    }))
}

fn check_unique_names(decls: &[ResolvedDecl]) -> std::result::Result<(), StructuralError> {
    let mut seen = HashSet::with_capacity(decls.len());
    for decl in decls {
        if !seen.insert(decl.name.as_str()) {
            return Err(StructuralError::DuplicateDeclaration {
                name: decl.name.clone(),
            });
        }
    }
    Ok(())
}
