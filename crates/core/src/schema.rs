//! Bot API schema structs for serde deserialization.
//!
//! This module mirrors the "custom" schema document published for the
//! Telegram Bot API: a version triple, a list of objects and a list of
//! methods. Only the fields generation needs are modelled; everything else
//! on the wire is accepted and ignored.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use crate::error::GenerateError;

/// Root schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Bot API version the document describes.
    pub version: Version,
    /// Release date of the most recent API change. Not used by generation.
    #[serde(default)]
    pub recent_changes: Option<ReleaseDate>,
    /// Remote operations, in declaration order.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Data shapes, in declaration order.
    #[serde(default)]
    pub objects: Vec<Object>,
}

/// Bot API version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Version {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Calendar date attached to `recent_changes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReleaseDate {
    /// Year.
    pub year: u16,
    /// Month, 1-based.
    pub month: u8,
    /// Day of month.
    pub day: u8,
}

/// A named data shape.
#[derive(Debug, Clone, Deserialize)]
pub struct Object {
    /// Object name as published, e.g. `Chat`.
    pub name: String,
    /// Human description; may span several lines.
    #[serde(default)]
    pub description: String,
    /// Link into the Bot API documentation.
    #[serde(default)]
    pub documentation_link: Option<String>,
    /// Fields of the object. Absent and empty are treated the same.
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A named remote operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    /// Method name as published, e.g. `sendMessage`.
    pub name: String,
    /// Human description; may span several lines.
    #[serde(default)]
    pub description: String,
    /// Link into the Bot API documentation.
    #[serde(default)]
    pub documentation_link: Option<String>,
    /// Parameters of the call. Absent and empty are treated the same.
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// Type of the successful result.
    pub return_type: TypeDescriptor,
}

/// A typed, possibly optional field of an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    /// Field name as it appears on the wire (snake_case).
    pub name: String,
    /// Human description; may span several lines.
    #[serde(default)]
    pub description: String,
    /// Whether the field is always present.
    #[serde(default)]
    pub required: bool,
    /// Shape of the field value.
    #[serde(flatten)]
    pub kind: TypeDescriptor,
}

/// A method parameter. Same shape as [`Property`]; `required` selects the
/// call-signature wrapper.
pub type Argument = Property;

/// Shape of a value, tagged on the wire by its `type` field.
///
/// The variant set is closed: a document using any other tag is rejected
/// when it is parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// Floating point number.
    Float,
    /// Integer number.
    Integer,
    /// String, optionally restricted to a set of literal values.
    String {
        /// Allowed values, in schema order. Empty means unrestricted.
        #[serde(default)]
        enumeration: Vec<String>,
    },
    /// Boolean.
    Bool,
    /// Union of alternative shapes.
    AnyOf {
        /// Alternatives, in schema order.
        any_of: Vec<TypeDescriptor>,
    },
    /// Reference to another object by name.
    Reference {
        /// Name of the referenced object.
        reference: String,
    },
    /// Homogeneous list.
    Array {
        /// Element shape.
        array: Box<TypeDescriptor>,
    },
}

/// Wire tag of a [`TypeDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `float`
    Float,
    /// `integer`
    Integer,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `any_of`
    AnyOf,
    /// `reference`
    Reference,
    /// `array`
    Array,
}

impl TypeTag {
    /// The tag as it is spelled in the schema document.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Float => "float",
            TypeTag::Integer => "integer",
            TypeTag::String => "string",
            TypeTag::Bool => "bool",
            TypeTag::AnyOf => "any_of",
            TypeTag::Reference => "reference",
            TypeTag::Array => "array",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeDescriptor {
    /// Wire tag of this descriptor.
    pub fn tag(&self) -> TypeTag {
        match self {
            TypeDescriptor::Float => TypeTag::Float,
            TypeDescriptor::Integer => TypeTag::Integer,
            TypeDescriptor::String { .. } => TypeTag::String,
            TypeDescriptor::Bool => TypeTag::Bool,
            TypeDescriptor::AnyOf { .. } => TypeTag::AnyOf,
            TypeDescriptor::Reference { .. } => TypeTag::Reference,
            TypeDescriptor::Array { .. } => TypeTag::Array,
        }
    }

    /// Literal values this descriptor is restricted to, if any.
    ///
    /// Looks through array elements and union alternatives, so an array of
    /// enumerated strings still yields its values. Enumerations from several
    /// alternatives are merged in order of appearance, without duplicates.
    pub fn enumeration(&self) -> Option<Vec<&str>> {
        let mut values = Vec::new();
        self.collect_enumeration(&mut values);
        (!values.is_empty()).then_some(values)
    }

    fn collect_enumeration<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeDescriptor::String { enumeration } => {
                for value in enumeration {
                    if !out.contains(&value.as_str()) {
                        out.push(value);
                    }
                }
            }
            TypeDescriptor::Array { array } => array.collect_enumeration(out),
            TypeDescriptor::AnyOf { any_of } => {
                for alternative in any_of {
                    alternative.collect_enumeration(out);
                }
            }
            TypeDescriptor::Float
            | TypeDescriptor::Integer
            | TypeDescriptor::Bool
            | TypeDescriptor::Reference { .. } => {}
        }
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeDescriptor::Reference { reference } => out.push(reference),
            TypeDescriptor::Array { array } => array.collect_references(out),
            TypeDescriptor::AnyOf { any_of } => {
                for alternative in any_of {
                    alternative.collect_references(out);
                }
            }
            TypeDescriptor::Float
            | TypeDescriptor::Integer
            | TypeDescriptor::String { .. }
            | TypeDescriptor::Bool => {}
        }
    }
}

/// A `reference` that names no object in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Object or method holding the reference.
    pub owner: String,
    /// Property or argument name; `return_type` for method results.
    pub field: String,
    /// The missing object name.
    pub target: String,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} -> {}", self.owner, self.field, self.target)
    }
}

impl Schema {
    /// Parse a schema from a JSON string.
    ///
    /// Errors carry the JSON path of the node that failed, so an unknown
    /// type tag points straight at the property that uses it.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let de = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(de).map_err(|err| GenerateError::Parse {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        })
    }

    /// Every reference that does not resolve to a declared object, in
    /// schema order (objects first, then methods).
    pub fn unresolved_references(&self) -> Vec<UnresolvedReference> {
        let known: HashSet<&str> = self.objects.iter().map(|o| o.name.as_str()).collect();
        let mut unresolved = Vec::new();

        let mut check = |owner: &str, field: &str, descriptor: &TypeDescriptor| {
            let mut targets = Vec::new();
            descriptor.collect_references(&mut targets);
            for target in targets {
                if !known.contains(target) {
                    unresolved.push(UnresolvedReference {
                        owner: owner.to_string(),
                        field: field.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        };

        for object in &self.objects {
            for property in &object.properties {
                check(&object.name, &property.name, &property.kind);
            }
        }
        for method in &self.methods {
            for argument in &method.arguments {
                check(&method.name, &argument.name, &argument.kind);
            }
            check(&method.name, "return_type", &method.return_type);
        }

        unresolved
    }

    /// Fail if any reference names an object the schema does not define.
    pub fn validate_references(&self) -> Result<(), GenerateError> {
        let unresolved = self.unresolved_references();
        if unresolved.is_empty() {
            return Ok(());
        }
        Err(GenerateError::UnknownReference {
            references: unresolved.iter().map(ToString::to_string).collect(),
        })
    }
}
