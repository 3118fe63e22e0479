//! TypeScript declarations for the Telegram Bot API, generated from the
//! machine-readable Bot API schema.
//!
//! [`Schema::from_json`] loads a schema document, [`generate`] turns it into
//! the objects, params, methods and index artifacts. Everything here is pure
//! and synchronous; fetching schemas and writing files is left to callers.

pub mod aggregate;
pub mod artifacts;
pub mod config;
pub mod convert;
pub mod error;
pub mod methods;
pub mod naming;
pub mod objects;
pub mod remap;
pub mod schema;
mod symbols;
pub mod ts;

pub use artifacts::{Artifact, Artifacts, generate};
pub use config::{EntityKind, GeneratorConfig, Namespace, Owner};
pub use error::GenerateError;
pub use schema::{
    Argument, Method, Object, Property, ReleaseDate, Schema, TypeDescriptor, TypeTag,
    UnresolvedReference, Version,
};
