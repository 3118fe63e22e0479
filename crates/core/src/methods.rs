//! Parameter interfaces and call signatures for schema methods.

use tracing::debug;

use crate::config::{GeneratorConfig, Owner};
use crate::convert::PropertyConverter;
use crate::objects::doc_comment;
use crate::schema::{Argument, Method};
use crate::ts::{TsProp, TsType, TsTypeDef, TypeDefKind};

/// How a method's parameter object is passed.
///
/// Decided once per method: a single optional argument makes the whole
/// parameter object optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Every argument is required; the parameter object must be passed.
    WithParams,
    /// At least one argument is optional; the parameter object may be omitted.
    WithOptionalParams,
    /// The method takes no arguments.
    WithoutParams,
}

impl CallKind {
    /// All kinds, in the order their wrapper types are declared.
    pub const ALL: [CallKind; 3] = [
        CallKind::WithParams,
        CallKind::WithOptionalParams,
        CallKind::WithoutParams,
    ];

    /// Select the kind for an argument list.
    pub fn for_arguments(arguments: &[Argument]) -> Self {
        if arguments.is_empty() {
            CallKind::WithoutParams
        } else if arguments.iter().any(|argument| !argument.required) {
            CallKind::WithOptionalParams
        } else {
            CallKind::WithParams
        }
    }

    /// Name of the generic wrapper type for this kind.
    pub fn wrapper_name(self) -> &'static str {
        match self {
            CallKind::WithParams => "CallAPI",
            CallKind::WithOptionalParams => "CallAPIWithOptionalParams",
            CallKind::WithoutParams => "CallAPIWithoutParams",
        }
    }
}

/// Everything one method contributes to the generated artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclarations {
    /// Schema name of the method.
    pub name: String,
    /// Enum unions followed by the parameter interface, for the params
    /// artifact. Empty for methods without arguments.
    pub declarations: Vec<TsTypeDef>,
    /// Wrapper selected for the call signature.
    pub call_kind: CallKind,
    /// Entry for the aggregate call-signature interface.
    pub signature: TsProp,
}

/// Emits parameter types and call signatures per schema method.
#[derive(Debug, Clone, Copy)]
pub struct MethodEmitter<'a> {
    config: &'a GeneratorConfig,
    converter: PropertyConverter<'a>,
}

impl<'a> MethodEmitter<'a> {
    /// Create an emitter bound to a configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            converter: PropertyConverter::new(config),
        }
    }

    /// Declarations and call signature for one method.
    pub fn generate(&self, method: &Method) -> MethodDeclarations {
        let owner = Owner::method(&method.name);
        let call_kind = CallKind::for_arguments(&method.arguments);
        let returns = self
            .converter
            .remapper()
            .resolve(&method.return_type, owner, None);

        let (declarations, args) = match call_kind {
            CallKind::WithoutParams => (Vec::new(), vec![returns]),
            CallKind::WithParams | CallKind::WithOptionalParams => {
                let mut declarations = self.converter.enum_unions(owner, &method.arguments);
                declarations.push(TsTypeDef {
                    name: self.config.params_type_name(&method.name),
                    doc: doc_comment(
                        &format!(
                            "Params object for {{@link {}.{} | {}}} method",
                            self.config.aggregate_name, method.name, method.name
                        ),
                        method.documentation_link.as_deref(),
                    ),
                    kind: TypeDefKind::Interface {
                        properties: self.converter.convert_many(owner, &method.arguments),
                    },
                });
                let params = TsType::Ref(self.config.params_reference(&method.name));
                (declarations, vec![params, returns])
            }
        };

        debug!(
            method = %method.name,
            arguments = method.arguments.len(),
            call_kind = call_kind.wrapper_name(),
            "Generated method declarations."
        );

        MethodDeclarations {
            name: method.name.clone(),
            declarations,
            call_kind,
            signature: TsProp {
                name: method.name.clone(),
                ty: TsType::Generic {
                    name: call_kind.wrapper_name().to_string(),
                    args,
                },
                optional: false,
                doc: doc_comment(&method.description, method.documentation_link.as_deref()),
            },
        }
    }

    /// Declarations for every method, in schema order.
    pub fn generate_many(&self, methods: &[Method]) -> Vec<MethodDeclarations> {
        methods.iter().map(|method| self.generate(method)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Property, TypeDescriptor};
    use crate::ts::{Emit, TsModule};

    fn argument(name: &str, required: bool, kind: TypeDescriptor) -> Property {
        Property {
            name: name.into(),
            description: String::new(),
            required,
            kind,
        }
    }

    fn method(name: &str, arguments: Vec<Argument>, return_type: TypeDescriptor) -> Method {
        Method {
            name: name.into(),
            description: String::new(),
            documentation_link: None,
            arguments,
            return_type,
        }
    }

    fn message() -> TypeDescriptor {
        TypeDescriptor::Reference {
            reference: "Message".into(),
        }
    }

    #[test]
    fn test_call_kind_selection() {
        assert_eq!(CallKind::for_arguments(&[]), CallKind::WithoutParams);
        assert_eq!(
            CallKind::for_arguments(&[argument("chat_id", true, TypeDescriptor::Integer)]),
            CallKind::WithParams
        );
        assert_eq!(
            CallKind::for_arguments(&[
                argument("chat_id", true, TypeDescriptor::Integer),
                argument("offset", false, TypeDescriptor::Integer),
            ]),
            CallKind::WithOptionalParams
        );
    }

    #[test]
    fn test_zero_argument_method() {
        let config = GeneratorConfig::default();
        let get_me = method(
            "getMe",
            vec![],
            TypeDescriptor::Reference {
                reference: "User".into(),
            },
        );
        let out = MethodEmitter::new(&config).generate(&get_me);
        assert!(out.declarations.is_empty());
        assert_eq!(out.call_kind, CallKind::WithoutParams);
        assert_eq!(
            out.signature.emit(),
            "  getMe: CallAPIWithoutParams<Objects.TelegramUser>;\n"
        );
    }

    #[test]
    fn test_method_with_required_arguments() {
        let config = GeneratorConfig::default();
        let forward = method(
            "forwardMessage",
            vec![
                argument("chat_id", true, TypeDescriptor::Integer),
                argument("message_id", true, TypeDescriptor::Integer),
            ],
            message(),
        );
        let out = MethodEmitter::new(&config).generate(&forward);
        assert_eq!(out.call_kind, CallKind::WithParams);
        assert_eq!(
            out.signature.emit(),
            "  forwardMessage: CallAPI<Params.ForwardMessageParams, Objects.TelegramMessage>;\n"
        );
        assert_eq!(out.declarations.len(), 1);
        assert_eq!(out.declarations[0].name, "ForwardMessageParams");
    }

    #[test]
    fn test_method_with_enum_and_optional_arguments() {
        let config = GeneratorConfig::default();
        let mut send = method(
            "sendMessage",
            vec![
                argument(
                    "chat_id",
                    true,
                    TypeDescriptor::AnyOf {
                        any_of: vec![
                            TypeDescriptor::Integer,
                            TypeDescriptor::String {
                                enumeration: vec![],
                            },
                        ],
                    },
                ),
                argument("text", true, TypeDescriptor::String { enumeration: vec![] }),
                argument(
                    "parse_mode",
                    false,
                    TypeDescriptor::String {
                        enumeration: vec!["HTML".into(), "MarkdownV2".into()],
                    },
                ),
                argument(
                    "reply_markup",
                    false,
                    TypeDescriptor::Reference {
                        reference: "InlineKeyboardMarkup".into(),
                    },
                ),
            ],
            message(),
        );
        send.documentation_link = Some("https://core.telegram.org/bots/api/#sendmessage".into());

        let out = MethodEmitter::new(&config).generate(&send);
        assert_eq!(out.call_kind, CallKind::WithOptionalParams);

        let rendered = TsModule {
            types: out.declarations,
            ..TsModule::default()
        }
        .emit();
        let expected = r#"export type SendMessageParseMode = "HTML" | "MarkdownV2";

/**
 * Params object for {@link APIMethods.sendMessage | sendMessage} method
 *
 * @see https://core.telegram.org/bots/api/#sendmessage
 */
export interface SendMessageParams {
  chat_id: number | string;
  text: string;
  parse_mode?: SendMessageParseMode;
  reply_markup?: Objects.TelegramInlineKeyboardMarkup;
}
"#;
        assert_eq!(rendered, expected);
        assert_eq!(
            out.signature.emit(),
            "  /** @see https://core.telegram.org/bots/api/#sendmessage */\n  sendMessage: CallAPIWithOptionalParams<Params.SendMessageParams, Objects.TelegramMessage>;\n"
        );
    }

    #[test]
    fn test_array_return_type() {
        let config = GeneratorConfig::default();
        let get_updates = method(
            "getUpdates",
            vec![argument("offset", false, TypeDescriptor::Integer)],
            TypeDescriptor::Array {
                array: Box::new(TypeDescriptor::Reference {
                    reference: "Update".into(),
                }),
            },
        );
        let out = MethodEmitter::new(&config).generate(&get_updates);
        assert_eq!(
            out.signature.ty.emit(),
            "CallAPIWithOptionalParams<Params.GetUpdatesParams, Objects.TelegramUpdate[]>"
        );
    }

    #[test]
    fn test_generate_many_preserves_order() {
        let config = GeneratorConfig::default();
        let methods = vec![
            method("getUpdates", vec![], message()),
            method("close", vec![], TypeDescriptor::Bool),
            method("getMe", vec![], message()),
        ];
        let names: Vec<_> = MethodEmitter::new(&config)
            .generate_many(&methods)
            .into_iter()
            .map(|out| out.name)
            .collect();
        assert_eq!(names, vec!["getUpdates", "close", "getMe"]);
    }
}
