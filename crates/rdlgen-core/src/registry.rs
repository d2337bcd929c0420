//! Type registry: name lookup and base-type classification
//!
//! The resolution engine only ever talks to a [`TypeRegistry`]. [`SchemaRegistry`] is the
//! implementation backed by a loaded [`Schema`] plus the built-in base types.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{BaseType, Schema, Type};
use std::collections::HashMap;

/// Lookup of type definitions by reference name
pub trait TypeRegistry {
    /// Resolve a type reference, or `None` if nothing is registered under that name
    fn find_type(&self, name: &str) -> Option<&Type>;

    /// Resolve a type reference, failing with [`SchemaError::UnknownType`]
    fn resolve(&self, name: &str) -> SchemaResult<&Type> {
        self.find_type(name)
            .ok_or_else(|| SchemaError::unknown_type(name))
    }

    /// Follow a type's alias chain down to its primitive classification
    fn base_type(&self, ty: &Type) -> SchemaResult<BaseType> {
        let mut current = ty;
        let mut chain: Vec<&str> = Vec::new();

        loop {
            if let Type::BaseType(base) = current {
                return Ok(*base);
            }

            chain.push(current.name());
            let parent = current.parent();
            if chain.contains(&parent) {
                chain.push(parent);
                return Err(SchemaError::circular(&chain));
            }

            current = self.resolve(parent)?;
        }
    }
}

/// Registry over one schema's types and the built-in base types
///
/// Schema types shadow built-ins of the same name.
pub struct SchemaRegistry<'a> {
    schema: &'a Schema,
    index: HashMap<&'a str, usize>,
    builtins: HashMap<&'static str, Type>,
}

impl<'a> SchemaRegistry<'a> {
    /// Build a registry for the given schema
    pub fn new(schema: &'a Schema) -> Self {
        let builtins = BaseType::ALL
            .into_iter()
            .map(|base| (base.name(), Type::BaseType(base)))
            .collect();

        let mut index = HashMap::with_capacity(schema.types.len());
        for (idx, ty) in schema.types.iter().enumerate() {
            if index.insert(ty.name(), idx).is_some() {
                tracing::warn!(name = ty.name(), "duplicate type definition, last one wins");
            }
        }

        Self {
            schema,
            index,
            builtins,
        }
    }

    /// The schema's own type definitions in declaration order
    pub fn types(&self) -> &'a [Type] {
        &self.schema.types
    }
}

impl TypeRegistry for SchemaRegistry<'_> {
    fn find_type(&self, name: &str) -> Option<&Type> {
        self.index
            .get(name)
            .map(|&idx| &self.schema.types[idx])
            .or_else(|| self.builtins.get(name))
    }
}
