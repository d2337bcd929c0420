//! Error types for schema loading and type resolution

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for schema loading and type resolution
///
/// Every variant is fatal for the generation run that produced it: the generator
/// cannot emit correct code for a type whose shape it does not know.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema document could not be decoded (includes unknown type variant tags)
    #[error("schema parse error: {0}")]
    Parse(String),

    /// Schema file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A type reference did not resolve through the registry
    #[error("cannot find type '{name}'")]
    UnknownType { name: String },

    /// A parent or alias chain loops back on itself
    #[error("circular type reference detected: {path}")]
    CircularReference { path: String },
}

impl SchemaError {
    /// Creates an unknown type error for the given reference
    pub fn unknown_type(name: impl Into<String>) -> Self {
        SchemaError::UnknownType { name: name.into() }
    }

    /// Creates a circular reference error from the visited chain
    pub fn circular<S: AsRef<str>>(chain: &[S]) -> Self {
        let path = chain
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" -> ");
        SchemaError::CircularReference { path }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}
