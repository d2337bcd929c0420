//! Type reference to target-language type name mapping
//!
//! The mapper classifies a reference by its base type and asks a [`TargetLanguage`] for the
//! matching name. Containers recurse into their element and key references.
//!
//! # Example
//!
//! ```
//! use rdlgen_core::{Schema, SchemaRegistry, java_type};
//!
//! let schema = Schema::from_json(r#"{"types": [
//!     {"ArrayTypeDef": {"type": "Array", "name": "Ids", "items": "Int64"}}
//! ]}"#).unwrap();
//! let registry = SchemaRegistry::new(&schema);
//!
//! assert_eq!(java_type(&registry, "Int32", false, None, None).unwrap(), "int");
//! assert_eq!(java_type(&registry, "Int32", true, None, None).unwrap(), "Integer");
//! assert_eq!(java_type(&registry, "Ids", false, None, None).unwrap(), "List<long>");
//! ```

use crate::error::SchemaResult;
use crate::jvm_types::Java;
use crate::registry::TypeRegistry;
use crate::schema::{ANY_TYPE, BaseType, ROOT_STRUCT, Type};
use crate::target::{Scalar, TargetLanguage};

/// Maps schema type references to names in a target language
pub struct TypeMapper<'a, R: ?Sized, L> {
    registry: &'a R,
    target: L,
}

impl<'a, R, L> TypeMapper<'a, R, L>
where
    R: TypeRegistry + ?Sized,
    L: TargetLanguage,
{
    /// Create a mapper over a registry for the given target
    pub fn new(registry: &'a R, target: L) -> Self {
        Self { registry, target }
    }

    /// Map a type reference to its target-language name.
    ///
    /// `optional` selects the boxed form of scalar types. `items` and `keys` are the
    /// element/key hints a struct field carries; they are only consulted when the
    /// reference resolves to a container that is not itself an array or map definition.
    /// Container elements are always mapped as required.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownType`](crate::SchemaError::UnknownType) if the reference,
    /// or any element or key reference reached while mapping it, does not resolve.
    pub fn map(
        &self,
        type_ref: &str,
        optional: bool,
        items: Option<&str>,
        keys: Option<&str>,
    ) -> SchemaResult<String> {
        let ty = self.registry.resolve(type_ref)?;
        let base = self.registry.base_type(ty)?;
        tracing::trace!(type_ref, %base, optional, "mapping type");

        let mapped = match base {
            BaseType::Any => self.target.any_type(),
            BaseType::String | BaseType::Symbol | BaseType::Timestamp | BaseType::Uuid => {
                self.target.string_type()
            }
            BaseType::Bool => self.target.scalar_type(Scalar::Bool, optional),
            BaseType::Int8 => self.target.scalar_type(Scalar::Int8, optional),
            BaseType::Int16 => self.target.scalar_type(Scalar::Int16, optional),
            BaseType::Int32 => self.target.scalar_type(Scalar::Int32, optional),
            BaseType::Int64 => self.target.scalar_type(Scalar::Int64, optional),
            BaseType::Float32 => self.target.scalar_type(Scalar::Float32, optional),
            BaseType::Float64 => self.target.scalar_type(Scalar::Float64, optional),
            BaseType::Array => {
                let item_ref = match ty {
                    Type::Array(def) => def.items.as_str(),
                    _ => hint(items),
                };
                let item = self.map(item_ref, false, None, None)?;
                self.target.list_type(&item)
            }
            BaseType::Map => {
                let (key_ref, item_ref) = match ty {
                    Type::Map(def) => (def.keys.as_str(), def.items.as_str()),
                    _ => (hint(keys), hint(items)),
                };
                let key = self.map(key_ref, false, None, None)?;
                let item = self.map(item_ref, false, None, None)?;
                self.target.map_type(&key, &item)
            }
            BaseType::Struct if type_ref == ROOT_STRUCT => self.target.any_type(),
            BaseType::Struct | BaseType::Bytes | BaseType::Enum | BaseType::Union => {
                type_ref.to_string()
            }
        };

        Ok(mapped)
    }
}

/// Element or key hint, with empty and `Any` treated as absent
fn hint(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() && v != ANY_TYPE => v,
        _ => ANY_TYPE,
    }
}

/// Map a type reference to its Java type name
pub fn java_type<R>(
    registry: &R,
    type_ref: &str,
    optional: bool,
    items: Option<&str>,
    keys: Option<&str>,
) -> SchemaResult<String>
where
    R: TypeRegistry + ?Sized,
{
    TypeMapper::new(registry, Java).map(type_ref, optional, items, keys)
}
