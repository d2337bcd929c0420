//! RDL schema model
//!
//! Mirrors the JSON form RDL tooling emits for a compiled schema. Type definitions are
//! externally tagged by variant (`{"StructTypeDef": {...}}`), which maps directly onto
//! the [`Type`] enum.
//!
//! # Example
//!
//! ```
//! use rdlgen_core::Schema;
//!
//! let schema = Schema::from_json(r#"{
//!     "name": "Contacts",
//!     "namespace": "com.example.contacts",
//!     "version": 2,
//!     "types": [
//!         {"StructTypeDef": {"type": "Struct", "name": "Contact",
//!             "fields": [{"name": "id", "type": "Int64"}]}}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(schema.types.len(), 1);
//! assert_eq!(schema.types[0].name(), "Contact");
//! ```

use crate::error::SchemaResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the root struct every inheritance chain ends at
pub const ROOT_STRUCT: &str = "Struct";

/// Name of the universal type used when a container declares no element type
pub const ANY_TYPE: &str = "Any";

/// Extended annotations (`x_*` keys) attached to a type definition
pub type Annotations = BTreeMap<String, String>;

/// A complete schema: metadata plus its named type definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name
    #[serde(default)]
    pub name: String,

    /// Namespace, used as the default target package
    #[serde(default)]
    pub namespace: String,

    /// Major version, if declared
    #[serde(default)]
    pub version: Option<i32>,

    /// Schema-level comment
    #[serde(default)]
    pub comment: Option<String>,

    /// User-defined types in declaration order
    #[serde(default)]
    pub types: Vec<Type>,
}

impl Schema {
    /// Load a schema from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a schema from its JSON form
    ///
    /// An unknown type variant tag is rejected here, so every [`Type`] that reaches the
    /// resolution engine carries a recognized variant.
    pub fn from_json(content: &str) -> SchemaResult<Self> {
        let schema: Schema = serde_json::from_str(content)?;
        tracing::debug!(
            schema = %schema.name,
            types = schema.types.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Iterate over the struct definitions of the schema
    pub fn structs(&self) -> impl Iterator<Item = &StructTypeDef> {
        self.types.iter().filter_map(|t| match t {
            Type::Struct(s) => Some(s),
            _ => None,
        })
    }
}

/// Primitive classification every type reduces to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Bytes,
    String,
    Timestamp,
    Symbol,
    #[serde(rename = "UUID")]
    Uuid,
    Array,
    Map,
    Struct,
    Enum,
    Union,
    Any,
}

impl BaseType {
    /// All built-in base types
    pub const ALL: [BaseType; 18] = [
        BaseType::Bool,
        BaseType::Int8,
        BaseType::Int16,
        BaseType::Int32,
        BaseType::Int64,
        BaseType::Float32,
        BaseType::Float64,
        BaseType::Bytes,
        BaseType::String,
        BaseType::Timestamp,
        BaseType::Symbol,
        BaseType::Uuid,
        BaseType::Array,
        BaseType::Map,
        BaseType::Struct,
        BaseType::Enum,
        BaseType::Union,
        BaseType::Any,
    ];

    /// The schema-level name of this base type
    pub fn name(&self) -> &'static str {
        match self {
            BaseType::Bool => "Bool",
            BaseType::Int8 => "Int8",
            BaseType::Int16 => "Int16",
            BaseType::Int32 => "Int32",
            BaseType::Int64 => "Int64",
            BaseType::Float32 => "Float32",
            BaseType::Float64 => "Float64",
            BaseType::Bytes => "Bytes",
            BaseType::String => "String",
            BaseType::Timestamp => "Timestamp",
            BaseType::Symbol => "Symbol",
            BaseType::Uuid => "UUID",
            BaseType::Array => "Array",
            BaseType::Map => "Map",
            BaseType::Struct => "Struct",
            BaseType::Enum => "Enum",
            BaseType::Union => "Union",
            BaseType::Any => "Any",
        }
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Type {
    /// A built-in primitive, registered under its own name
    BaseType(BaseType),
    #[serde(rename = "StructTypeDef")]
    Struct(StructTypeDef),
    #[serde(rename = "MapTypeDef")]
    Map(MapTypeDef),
    #[serde(rename = "ArrayTypeDef")]
    Array(ArrayTypeDef),
    #[serde(rename = "EnumTypeDef")]
    Enum(EnumTypeDef),
    #[serde(rename = "UnionTypeDef")]
    Union(UnionTypeDef),
    #[serde(rename = "StringTypeDef")]
    String(StringTypeDef),
    #[serde(rename = "BytesTypeDef")]
    Bytes(BytesTypeDef),
    #[serde(rename = "NumberTypeDef")]
    Number(NumberTypeDef),
}

impl Type {
    /// The type's own name
    pub fn name(&self) -> &str {
        match self {
            Type::BaseType(b) => b.name(),
            Type::Struct(t) => &t.name,
            Type::Map(t) => &t.name,
            Type::Array(t) => &t.name,
            Type::Enum(t) => &t.name,
            Type::Union(t) => &t.name,
            Type::String(t) => &t.name,
            Type::Bytes(t) => &t.name,
            Type::Number(t) => &t.name,
        }
    }

    /// The reference this type is derived from
    ///
    /// A base type is its own parent.
    pub fn parent(&self) -> &str {
        match self {
            Type::BaseType(b) => b.name(),
            Type::Struct(t) => &t.parent,
            Type::Map(t) => &t.parent,
            Type::Array(t) => &t.parent,
            Type::Enum(t) => &t.parent,
            Type::Union(t) => &t.parent,
            Type::String(t) => &t.parent,
            Type::Bytes(t) => &t.parent,
            Type::Number(t) => &t.parent,
        }
    }

    /// The definition's comment, if any
    pub fn comment(&self) -> Option<&str> {
        match self {
            Type::BaseType(_) => None,
            Type::Struct(t) => t.comment.as_deref(),
            Type::Map(t) => t.comment.as_deref(),
            Type::Array(t) => t.comment.as_deref(),
            Type::Enum(t) => t.comment.as_deref(),
            Type::Union(t) => t.comment.as_deref(),
            Type::String(t) => t.comment.as_deref(),
            Type::Bytes(t) => t.comment.as_deref(),
            Type::Number(t) => t.comment.as_deref(),
        }
    }

    /// Short variant label for diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            Type::BaseType(_) => "BaseType",
            Type::Struct(_) => "StructTypeDef",
            Type::Map(_) => "MapTypeDef",
            Type::Array(_) => "ArrayTypeDef",
            Type::Enum(_) => "EnumTypeDef",
            Type::Union(_) => "UnionTypeDef",
            Type::String(_) => "StringTypeDef",
            Type::Bytes(_) => "BytesTypeDef",
            Type::Number(_) => "NumberTypeDef",
        }
    }
}

/// Struct definition with single-parent inheritance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructTypeDef {
    /// Parent type reference ([`ROOT_STRUCT`] for a root struct)
    #[serde(rename = "type")]
    pub parent: String,

    pub name: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub annotations: Annotations,

    /// Own fields in declaration order (inherited fields are not repeated)
    #[serde(default)]
    pub fields: Vec<StructFieldDef>,

    /// Whether unknown fields are rejected
    #[serde(default)]
    pub closed: bool,
}

/// A field declared on a struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructFieldDef {
    pub name: String,

    /// Declared type reference
    #[serde(rename = "type")]
    pub type_ref: String,

    #[serde(default)]
    pub optional: bool,

    /// Default value literal, if one is declared
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    #[serde(default)]
    pub comment: Option<String>,

    /// Element type when the field type is an array or map alias
    #[serde(default)]
    pub items: Option<String>,

    /// Key type when the field type is a map alias
    #[serde(default)]
    pub keys: Option<String>,

    #[serde(default)]
    pub annotations: Annotations,
}

impl StructFieldDef {
    /// Create a field with just a name and type reference
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            optional: false,
            default: None,
            comment: None,
            items: None,
            keys: None,
            annotations: Annotations::new(),
        }
    }

    /// Mark the field optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default = "any_type")]
    pub keys: String,
    #[serde(default = "any_type")]
    pub items: String,
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub min_size: Option<i32>,
    #[serde(default)]
    pub max_size: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default = "any_type")]
    pub items: String,
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub min_size: Option<i32>,
    #[serde(default)]
    pub max_size: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub elements: Vec<EnumElementDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumElementDef {
    pub symbol: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub min_size: Option<i32>,
    #[serde(default)]
    pub max_size: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytesTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub min_size: Option<i32>,
    #[serde(default)]
    pub max_size: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberTypeDef {
    #[serde(rename = "type")]
    pub parent: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub min: Option<serde_json::Value>,
    #[serde(default)]
    pub max: Option<serde_json::Value>,
}

fn any_type() -> String {
    ANY_TYPE.to_string()
}
