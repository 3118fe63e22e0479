//! Errors raised while loading a schema or assembling artifacts.

use thiserror::Error;

/// Failure of a generation run.
///
/// Per-item emitters never fail; everything here is detected either while
/// reading the schema document or while checking the full emitted symbol set.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The schema document is not valid JSON or does not match the schema model.
    #[error("Failed to parse schema at `{path}`: {message}")]
    Parse {
        /// JSON path of the offending node (`.` for the document root).
        path: String,
        /// Underlying deserializer message.
        message: String,
    },

    /// Two declarations would be emitted under the same name.
    #[error("Duplicate symbol `{name}` declared by {first} and {second}")]
    DuplicateSymbol {
        /// The colliding TypeScript name.
        name: String,
        /// Origin of the first declaration.
        first: String,
        /// Origin of the second declaration.
        second: String,
    },

    /// One or more `reference` types name an object the schema does not define.
    #[error("Unknown object reference(s): {}", .references.join(", "))]
    UnknownReference {
        /// Rendered `Owner.field -> Target` entries, in schema order.
        references: Vec<String>,
    },
}
