//! Naming and namespacing conventions shared by every emitter.

use crate::naming::{capitalize_first, pascal_case};

/// Whether a conversion happens on behalf of an object or a method.
///
/// Selects how enum unions are named and whether object references need a
/// namespace qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Declarations land in the objects artifact.
    Object,
    /// Declarations land in the params artifact.
    Method,
}

impl EntityKind {
    /// Qualifier applied to object references from this context.
    pub fn reference_namespace(self) -> Namespace {
        match self {
            EntityKind::Object => Namespace::Local,
            EntityKind::Method => Namespace::Objects,
        }
    }
}

/// Where a referenced object type lives relative to the emitting artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Same artifact, no qualifier.
    Local,
    /// The objects artifact, reached through its namespace import.
    Objects,
}

/// The object or method currently being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner<'a> {
    /// Conversion context.
    pub kind: EntityKind,
    /// Schema name of the owner, e.g. `Chat` or `sendMessage`.
    pub name: &'a str,
}

impl<'a> Owner<'a> {
    /// An object owner.
    pub fn object(name: &'a str) -> Self {
        Self {
            kind: EntityKind::Object,
            name,
        }
    }

    /// A method owner.
    pub fn method(name: &'a str) -> Self {
        Self {
            kind: EntityKind::Method,
            name,
        }
    }
}

/// Settings carried down the whole generation call chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Prefix of every object interface and object enum union.
    pub object_prefix: String,
    /// Namespace alias under which the objects artifact is imported.
    pub objects_namespace: String,
    /// Namespace alias under which the params artifact is imported.
    pub params_namespace: String,
    /// Import specifier of the objects artifact.
    pub objects_module: String,
    /// Import specifier of the params artifact.
    pub params_module: String,
    /// Import specifier of the methods artifact.
    pub methods_module: String,
    /// Name of the aggregate call-signature interface.
    pub aggregate_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            object_prefix: "Telegram".into(),
            objects_namespace: "Objects".into(),
            params_namespace: "Params".into(),
            objects_module: "./objects".into(),
            params_module: "./params".into(),
            methods_module: "./methods".into(),
            aggregate_name: "APIMethods".into(),
        }
    }
}

impl GeneratorConfig {
    /// Interface name of an object, e.g. `Chat` -> `TelegramChat`.
    pub fn object_type_name(&self, object: &str) -> String {
        format!("{}{}", self.object_prefix, pascal_case(object))
    }

    /// Parameter interface name of a method, e.g. `sendMessage` -> `SendMessageParams`.
    pub fn params_type_name(&self, method: &str) -> String {
        format!("{}Params", capitalize_first(method))
    }

    /// Name of the union synthesized for an enumerated field.
    pub fn enum_union_name(&self, owner: Owner<'_>, field: &str) -> String {
        match owner.kind {
            EntityKind::Object => format!(
                "{}{}",
                self.object_type_name(owner.name),
                pascal_case(field)
            ),
            EntityKind::Method => {
                format!("{}{}", capitalize_first(owner.name), pascal_case(field))
            }
        }
    }

    /// Reference to an object type as seen from `namespace`.
    pub fn object_reference(&self, object: &str, namespace: Namespace) -> String {
        match namespace {
            Namespace::Local => self.object_type_name(object),
            Namespace::Objects => format!(
                "{}.{}",
                self.objects_namespace,
                self.object_type_name(object)
            ),
        }
    }

    /// Reference to a method's parameter interface from the methods artifact.
    pub fn params_reference(&self, method: &str) -> String {
        format!("{}.{}", self.params_namespace, self.params_type_name(method))
    }
}
