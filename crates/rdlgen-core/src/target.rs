//! Target language naming seam

/// Fixed-width scalar kinds with a primitive and a boxed representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

/// Names a target language gives to the shapes the type mapper produces
pub trait TargetLanguage {
    /// Universal object type
    fn any_type(&self) -> String;

    /// Textual type (strings, symbols, timestamps, UUIDs)
    fn string_type(&self) -> String;

    /// Scalar type; `optional` selects the boxed/nullable form
    fn scalar_type(&self, scalar: Scalar, optional: bool) -> String;

    /// Generic sequence of `item`
    fn list_type(&self, item: &str) -> String;

    /// Generic mapping from `key` to `item`
    fn map_type(&self, key: &str, item: &str) -> String;
}
