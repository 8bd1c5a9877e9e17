//! Struct flattening.
//!
//! Resolves embedding into one flat field list per struct. Embedded fields
//! appear at the position of the embedding reference, in the embedded
//! struct's own order. A struct's own fields shadow every embedded field of
//! the same wire name, wherever the embedding occurs; between two embedded
//! structs the earlier one wins. Shadowed fields are dropped.

use std::collections::HashSet;

use flowgen_core::{Field, Member, Model, StructDef};
use indexmap::IndexMap;
use log::debug;

use crate::error::{Location, StructuralError};

/// A field in a flattened struct, with the struct that declares it.
#[derive(Clone, Copy, Debug)]
pub struct FlatField<'m> {
    pub origin: &'m str,
    pub field: &'m Field,
}

impl FlatField<'_> {
    pub fn location(&self) -> Location {
        Location::field(self.origin, &self.field.ident)
    }
}

/// Flattened field lists of every struct, in model order.
#[derive(Debug, Default)]
pub struct Flattened<'m> {
    structs: IndexMap<&'m str, Vec<FlatField<'m>>>,
}

impl<'m> Flattened<'m> {
    pub fn iter(&self) -> impl Iterator<Item = (&'m str, &[FlatField<'m>])> {
        self.structs.iter().map(|(name, fields)| (*name, fields.as_slice()))
    }
}

/// Flatten every struct of the model.
pub fn flatten(model: &Model) -> Result<Flattened<'_>, StructuralError> {
    let mut flattener = Flattener {
        model,
        done: IndexMap::new(),
        visiting: Vec::new(),
    };
    let mut structs = IndexMap::new();
    for def in model.iter().filter_map(|d| d.as_struct()) {
        let fields = flattener.flatten_struct(def)?;
        structs.insert(def.name.as_str(), fields);
    }
    debug!("flattened {} structs", structs.len());
    Ok(Flattened { structs })
}

struct Flattener<'m> {
    model: &'m Model,
    done: IndexMap<&'m str, Vec<FlatField<'m>>>,
    /// Structs currently being flattened, outermost first.
    visiting: Vec<&'m str>,
}

impl<'m> Flattener<'m> {
    fn flatten_struct(&mut self, def: &'m StructDef) -> Result<Vec<FlatField<'m>>, StructuralError> {
        let name = def.name.as_str();
        if let Some(fields) = self.done.get(name) {
            return Ok(fields.clone());
        }
        if let Some(start) = self.visiting.iter().position(|n| *n == name) {
            let mut path: Vec<String> = self.visiting[start..].iter().map(|n| (*n).to_owned()).collect();
            path.push(name.to_owned());
            return Err(StructuralError::EmbeddingCycle { path });
        }

        self.visiting.push(name);
        let own: HashSet<&str> = def.fields().map(|f| f.name.as_str()).collect();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut fields = Vec::new();

        for member in &def.members {
            match member {
                Member::Field(field) => {
                    seen.insert(field.name.as_str());
                    fields.push(FlatField {
                        origin: name,
                        field,
                    });
                }
                Member::Embed(embed) => {
                    let Some(inner) = self.model.get_struct(&embed.name) else {
                        return Err(StructuralError::UnknownEmbed {
                            location: Location::field(name, &embed.name),
                            name: embed.name.clone(),
                        });
                    };
                    for flat in self.flatten_struct(inner)? {
                        let wire = flat.field.name.as_str();
                        if own.contains(wire) || seen.contains(wire) {
                            debug!("{name}: `{wire}` from {} is shadowed", flat.origin);
                            continue;
                        }
                        seen.insert(wire);
                        fields.push(flat);
                    }
                }
            }
        }

        self.visiting.pop();
        self.done.insert(name, fields.clone());
        Ok(fields)
    }
}
