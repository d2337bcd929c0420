//! JVM type mappings for Java code generation.
//!
//! # Type Mappings
//!
//! | Base type | Java (required) | Java (optional) |
//! |-----------|-----------------|-----------------|
//! | `String`, `Symbol`, `Timestamp`, `UUID` | `String` | `String` |
//! | `Bool` | `boolean` | `Boolean` |
//! | `Int8` | `byte` | `Byte` |
//! | `Int16` | `short` | `Short` |
//! | `Int32` | `int` | `Integer` |
//! | `Int64` | `long` | `Long` |
//! | `Float32` | `float` | `Float` |
//! | `Float64` | `double` | `Double` |
//! | `Array` | `List<T>` | `List<T>` |
//! | `Map` | `Map<K,V>` | `Map<K,V>` |
//! | `Any`, root `Struct` | `Object` | `Object` |

use crate::target::{Scalar, TargetLanguage};

/// A JVM primitive type and its boxed form.
#[derive(Debug, Clone, PartialEq)]
pub struct JvmType {
    /// The primitive type name (e.g., "int", "boolean").
    pub primitive: String,
    /// The boxed/nullable type name (e.g., "Integer", "Boolean").
    pub boxed: String,
}

impl JvmType {
    /// Create a new JVM primitive type.
    pub fn primitive(primitive: &str, boxed: &str) -> Self {
        Self {
            primitive: primitive.to_string(),
            boxed: boxed.to_string(),
        }
    }

    /// The JVM pair for a scalar kind; widths map one to one.
    pub fn for_scalar(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool => JvmType::primitive("boolean", "Boolean"),
            Scalar::Int8 => JvmType::primitive("byte", "Byte"),
            Scalar::Int16 => JvmType::primitive("short", "Short"),
            Scalar::Int32 => JvmType::primitive("int", "Integer"),
            Scalar::Int64 => JvmType::primitive("long", "Long"),
            Scalar::Float32 => JvmType::primitive("float", "Float"),
            Scalar::Float64 => JvmType::primitive("double", "Double"),
        }
    }

    /// Get the appropriate Java type string.
    ///
    /// For optional fields, returns the boxed type to allow null.
    /// For required fields, returns the primitive type.
    pub fn java_type(&self, optional: bool) -> &str {
        if optional {
            &self.boxed
        } else {
            &self.primitive
        }
    }
}

/// Java as a generation target
#[derive(Debug, Clone, Copy, Default)]
pub struct Java;

impl TargetLanguage for Java {
    fn any_type(&self) -> String {
        "Object".to_string()
    }

    fn string_type(&self) -> String {
        "String".to_string()
    }

    fn scalar_type(&self, scalar: Scalar, optional: bool) -> String {
        JvmType::for_scalar(scalar).java_type(optional).to_string()
    }

    // Element names are used as mapped; scalar elements stay primitive.
    fn list_type(&self, item: &str) -> String {
        format!("List<{item}>")
    }

    fn map_type(&self, key: &str, item: &str) -> String {
        format!("Map<{key},{item}>")
    }
}

/// Check if any of the rendered field types needs a `java.util.List` import.
pub fn needs_list_import<'a>(types: impl IntoIterator<Item = &'a str>) -> bool {
    types.into_iter().any(|t| t.contains("List<"))
}

/// Check if any of the rendered field types needs a `java.util.Map` import.
pub fn needs_map_import<'a>(types: impl IntoIterator<Item = &'a str>) -> bool {
    types.into_iter().any(|t| t.contains("Map<"))
}
