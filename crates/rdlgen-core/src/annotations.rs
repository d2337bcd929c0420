//! Extended annotation lookup

use crate::schema::{Annotations, Type};

/// Annotations of the type definition named `type_ref`.
///
/// Scans `types` in order and returns a copy of the annotations of the first struct, string,
/// map, array, bytes, number or union definition with that name. Enum and base type
/// definitions never match. Returns an empty map when nothing matches.
pub fn annotations_for(type_ref: &str, types: &[Type]) -> Annotations {
    for ty in types {
        let (name, annotations) = match ty {
            Type::Struct(def) => (&def.name, &def.annotations),
            Type::String(def) => (&def.name, &def.annotations),
            Type::Map(def) => (&def.name, &def.annotations),
            Type::Array(def) => (&def.name, &def.annotations),
            Type::Bytes(def) => (&def.name, &def.annotations),
            Type::Number(def) => (&def.name, &def.annotations),
            Type::Union(def) => (&def.name, &def.annotations),
            Type::Enum(_) | Type::BaseType(_) => continue,
        };
        if name.as_str() == type_ref {
            return annotations.clone();
        }
    }
    Annotations::new()
}
