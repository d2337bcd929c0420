//! rdlgen-core - RDL schema model and type resolution engine
//!
//! This crate provides the schema-facing half of the generator:
//! - [`Schema`] and [`Type`] for the loaded RDL type definitions
//! - [`TypeRegistry`] for name lookup and base-type classification
//! - [`flattened_fields`] for struct fields across the inheritance chain
//! - [`TypeMapper`] for target-language type names
//! - [`annotations_for`] for extended annotation lookup
//! - [`text`] helpers for emitting source text

mod annotations;
mod error;
mod flatten;
mod jvm_types;
mod mapper;
mod registry;
mod schema;
mod target;
pub mod text;

pub use annotations::annotations_for;
pub use error::{SchemaError, SchemaResult};
pub use flatten::flattened_fields;
pub use jvm_types::{Java, JvmType, needs_list_import, needs_map_import};
pub use mapper::{TypeMapper, java_type};
pub use registry::{SchemaRegistry, TypeRegistry};
pub use schema::{
    ANY_TYPE, Annotations, ArrayTypeDef, BaseType, BytesTypeDef, EnumElementDef, EnumTypeDef,
    MapTypeDef, NumberTypeDef, ROOT_STRUCT, Schema, StringTypeDef, StructFieldDef, StructTypeDef,
    Type, UnionTypeDef,
};
pub use target::{Scalar, TargetLanguage};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotations, Java, Schema, SchemaError, SchemaRegistry, SchemaResult, StructFieldDef,
        Type, TypeMapper, TypeRegistry, annotations_for, flattened_fields, java_type,
    };
}
