//! Source to target type mapping.
//!
//! | source                                      | target          |
//! |---------------------------------------------|-----------------|
//! | integers, floats, complex, `byte`, `rune`   | `number`        |
//! | `string`, `error`                           | `string`        |
//! | `bool`                                      | `boolean`       |
//! | `interface`, `any`, inline `struct`         | `Object`        |
//! | `*T`                                        | `?T`            |
//! | `[]T`, `[N]T`                               | `Array<T>`      |
//! | `[]byte`                                    | `string`        |
//! | `map[K]V`                                   | `{ [key: K]: V }` |
//! | `time.Time` / `time.Duration`               | `string` / `number` |
//! | `json.RawMessage`                           | `Object`        |
//! | other `pkg.Name`                            | opaque          |
//! | generic declaration                         | opaque          |
//!
//! Target names (`number`, `boolean`, `Object`) map to themselves, so mapping
//! an already mapped type changes nothing.

use flowgen_core::{DescType, Model, TypeRef};
use log::debug;

use crate::error::{Location, MappingError};

/// Maps source types against one model.
#[derive(Clone, Copy, Debug)]
pub struct Mapper<'m> {
    model: &'m Model,
}

impl<'m> Mapper<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Map `ty`. `location` identifies the field or declaration in errors.
    pub fn map(&self, ty: &TypeRef, location: &Location) -> Result<DescType, MappingError> {
        match ty {
            // Nullability is a flag, so `**T` stays singly nullable.
            TypeRef::Pointer(inner) => Ok(self.map(inner, location)?.nullable()),
            TypeRef::Slice(elem) if is_byte(elem) => Ok(DescType::string()),
            TypeRef::Slice(elem) | TypeRef::Array { elem, .. } => {
                Ok(DescType::array(self.map(elem, location)?))
            }
            TypeRef::Map { key, value } => Ok(DescType::map(
                self.map(key, location)?,
                self.map(value, location)?,
            )),
            TypeRef::Primitive(name) if name == "generic" => Ok(DescType::opaque(name)),
            TypeRef::Primitive(name) => {
                primitive(name).ok_or_else(|| MappingError::UnmappedPrimitive {
                    location: location.clone(),
                    ty: name.clone(),
                })
            }
            TypeRef::Named(name) => Ok(self.named(name)),
            TypeRef::Opaque { package, name } => Ok(external(package, name)),
        }
    }

    fn named(&self, name: &str) -> DescType {
        if self.model.contains(name) {
            return DescType::named(name);
        }
        if let Some(target) = primitive(name) {
            return target;
        }
        debug!("reference to undeclared type `{name}` kept by name");
        DescType::named(name)
    }
}

fn is_byte(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Primitive(name) if name == "byte" || name == "uint8")
}

fn primitive(name: &str) -> Option<DescType> {
    let ty = match name {
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "uintptr" | "byte" | "rune" | "float32" | "float64" | "complex64"
        | "complex128" | "number" => DescType::number(),
        "string" | "error" => DescType::string(),
        "bool" | "boolean" => DescType::boolean(),
        "interface" | "struct" | "Object" => DescType::object(),
        _ => return None,
    };
    Some(ty)
}

fn external(package: &str, name: &str) -> DescType {
    match (package, name) {
        ("time", "Time") => DescType::string(),
        ("time", "Duration") => DescType::number(),
        ("json", "RawMessage") => DescType::object(),
        _ => DescType::opaque(&format!("{package}.{name}")),
    }
}
