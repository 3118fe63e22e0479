//! Schema type descriptors to TypeScript type expressions.
//!
//! Dispatch is an exhaustive match over [`TypeDescriptor`]; a tag the schema
//! model does not know never reaches this point because parsing rejects it.

use tracing::trace;

use crate::config::{GeneratorConfig, Owner};
use crate::schema::TypeDescriptor;
use crate::ts::{TsPrimitive, TsType};

/// Resolves type descriptors in the naming conventions of `config`.
#[derive(Debug, Clone, Copy)]
pub struct TypeRemapper<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> TypeRemapper<'a> {
    /// Create a remapper bound to a configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Resolve `descriptor`, found on `field` of `owner`, to a type expression.
    ///
    /// `field` names the property or argument being resolved; enumerated
    /// strings become a reference to the union synthesized for that field,
    /// which the caller must declare. Without a field (method return types)
    /// enumerated strings are written out as an inline literal union.
    pub fn resolve(
        &self,
        descriptor: &TypeDescriptor,
        owner: Owner<'_>,
        field: Option<&str>,
    ) -> TsType {
        trace!(
            owner = owner.name,
            field = field.unwrap_or("<return>"),
            tag = %descriptor.tag(),
            "Resolving type descriptor."
        );
        match descriptor {
            TypeDescriptor::Float | TypeDescriptor::Integer => {
                TsType::Primitive(TsPrimitive::Number)
            }
            TypeDescriptor::Bool => TsType::Primitive(TsPrimitive::Boolean),
            TypeDescriptor::String { enumeration } if enumeration.is_empty() => {
                TsType::Primitive(TsPrimitive::String)
            }
            TypeDescriptor::String { enumeration } => match field {
                Some(field) => TsType::Ref(self.config.enum_union_name(owner, field)),
                None => TsType::string_literals(enumeration),
            },
            TypeDescriptor::Reference { reference } => TsType::Ref(
                self.config
                    .object_reference(reference, owner.kind.reference_namespace()),
            ),
            TypeDescriptor::AnyOf { any_of } => union_of(
                any_of
                    .iter()
                    .map(|alternative| self.resolve(alternative, owner, field)),
            ),
            TypeDescriptor::Array { array } => {
                TsType::Array(Box::new(self.resolve(array, owner, field)))
            }
        }
    }
}

/// Union of `members` with nested unions flattened and repeats dropped.
///
/// Enumerated alternatives of one field all resolve to the same union name,
/// so they collapse to a single member. A single remaining member is
/// returned as-is.
fn union_of(members: impl IntoIterator<Item = TsType>) -> TsType {
    let mut flat: Vec<TsType> = Vec::new();
    for member in members {
        let nested = match member {
            TsType::Union(nested) => nested,
            other => vec![other],
        };
        for ty in nested {
            if !flat.contains(&ty) {
                flat.push(ty);
            }
        }
    }
    match <[TsType; 1]>::try_from(flat) {
        Ok([only]) => only,
        Err(flat) => TsType::Union(flat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ts::Emit;

    fn reference(name: &str) -> TypeDescriptor {
        TypeDescriptor::Reference {
            reference: name.into(),
        }
    }

    fn array(element: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::Array {
            array: Box::new(element),
        }
    }

    fn plain_string() -> TypeDescriptor {
        TypeDescriptor::String {
            enumeration: vec![],
        }
    }

    fn resolve_object(descriptor: &TypeDescriptor) -> String {
        let config = GeneratorConfig::default();
        TypeRemapper::new(&config)
            .resolve(descriptor, Owner::object("Message"), Some("field"))
            .emit()
    }

    fn resolve_method(descriptor: &TypeDescriptor) -> String {
        let config = GeneratorConfig::default();
        TypeRemapper::new(&config)
            .resolve(descriptor, Owner::method("sendMessage"), Some("field"))
            .emit()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(resolve_object(&TypeDescriptor::Integer), "number");
        assert_eq!(resolve_object(&TypeDescriptor::Float), "number");
        assert_eq!(resolve_object(&TypeDescriptor::Bool), "boolean");
        assert_eq!(resolve_object(&plain_string()), "string");
    }

    #[test]
    fn test_reference_qualification_per_kind() {
        assert_eq!(resolve_object(&reference("User")), "TelegramUser");
        assert_eq!(resolve_method(&reference("User")), "Objects.TelegramUser");
    }

    #[test]
    fn test_array_of_reference() {
        assert_eq!(
            resolve_object(&array(reference("PhotoSize"))),
            "TelegramPhotoSize[]"
        );
    }

    #[test]
    fn test_nested_arrays() {
        assert_eq!(resolve_object(&array(array(plain_string()))), "string[][]");
        assert_eq!(
            resolve_method(&array(array(reference("InlineKeyboardButton")))),
            "Objects.TelegramInlineKeyboardButton[][]"
        );
    }

    #[test]
    fn test_any_of() {
        let descriptor = TypeDescriptor::AnyOf {
            any_of: vec![plain_string(), reference("Foo")],
        };
        assert_eq!(resolve_object(&descriptor), "string | TelegramFoo");

        let nested = TypeDescriptor::AnyOf {
            any_of: vec![
                TypeDescriptor::Integer,
                array(reference("Foo")),
                TypeDescriptor::AnyOf {
                    any_of: vec![TypeDescriptor::Bool],
                },
            ],
        };
        assert_eq!(
            resolve_method(&nested),
            "number | Objects.TelegramFoo[] | boolean"
        );
    }

    #[test]
    fn test_array_of_any_of_is_parenthesized() {
        let descriptor = array(TypeDescriptor::AnyOf {
            any_of: vec![reference("InputMediaPhoto"), reference("InputMediaVideo")],
        });
        assert_eq!(
            resolve_method(&descriptor),
            "(Objects.TelegramInputMediaPhoto | Objects.TelegramInputMediaVideo)[]"
        );
    }

    #[test]
    fn test_enumeration_resolves_to_union_name() {
        let config = GeneratorConfig::default();
        let remapper = TypeRemapper::new(&config);
        let descriptor = TypeDescriptor::String {
            enumeration: vec!["HTML".into(), "MarkdownV2".into()],
        };

        let in_object = remapper.resolve(&descriptor, Owner::object("Chat"), Some("type"));
        assert_eq!(in_object, TsType::Ref("TelegramChatType".into()));

        let in_method =
            remapper.resolve(&descriptor, Owner::method("sendMessage"), Some("parse_mode"));
        assert_eq!(in_method.emit(), "SendMessageParseMode");

        let in_array = remapper.resolve(
            &array(descriptor.clone()),
            Owner::method("getUpdates"),
            Some("allowed_updates"),
        );
        assert_eq!(in_array.emit(), "GetUpdatesAllowedUpdates[]");
    }

    #[test]
    fn test_enumerated_return_type_is_inline() {
        let config = GeneratorConfig::default();
        let descriptor = TypeDescriptor::String {
            enumeration: vec!["ok".into(), "error".into()],
        };
        let ty = TypeRemapper::new(&config).resolve(&descriptor, Owner::method("ping"), None);
        assert_eq!(ty.emit(), "\"ok\" | \"error\"");
    }

    #[test]
    fn test_nested_any_of_in_array_is_flattened() {
        let descriptor = array(TypeDescriptor::AnyOf {
            any_of: vec![TypeDescriptor::AnyOf {
                any_of: vec![plain_string(), TypeDescriptor::Integer],
            }],
        });
        assert_eq!(resolve_object(&descriptor), "(string | number)[]");

        let single = array(TypeDescriptor::AnyOf {
            any_of: vec![reference("Foo")],
        });
        assert_eq!(resolve_object(&single), "TelegramFoo[]");
    }

    #[test]
    fn test_any_of_with_two_enumerations_references_one_union() {
        let config = GeneratorConfig::default();
        let descriptor = TypeDescriptor::AnyOf {
            any_of: vec![
                TypeDescriptor::String {
                    enumeration: vec!["a".into(), "b".into()],
                },
                TypeDescriptor::String {
                    enumeration: vec!["c".into()],
                },
            ],
        };
        let remapper = TypeRemapper::new(&config);

        let ty = remapper.resolve(&descriptor, Owner::object("X"), Some("f"));
        assert_eq!(ty, TsType::Ref("TelegramXF".into()));

        let inline = remapper.resolve(&descriptor, Owner::method("ping"), None);
        assert_eq!(inline.emit(), "\"a\" | \"b\" | \"c\"");
    }
}
