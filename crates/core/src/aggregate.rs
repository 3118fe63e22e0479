//! The aggregate interface binding every method name to its call signature.

use crate::config::GeneratorConfig;
use crate::methods::{CallKind, MethodDeclarations};
use crate::ts::{TsParam, TsType, TsTypeDef, TypeDefKind};

/// Folds per-method call signatures into one interface.
#[derive(Debug, Clone, Copy)]
pub struct AggregateEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> AggregateEmitter<'a> {
    /// Create an emitter bound to a configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generic wrapper types the call signatures are written in, one per
    /// [`CallKind`].
    pub fn wrapper_types(&self) -> Vec<TsTypeDef> {
        CallKind::ALL.iter().map(|kind| wrapper_type(*kind)).collect()
    }

    /// The aggregate interface, entries in method order.
    pub fn generate_many(&self, methods: &[MethodDeclarations]) -> TsTypeDef {
        TsTypeDef {
            name: self.config.aggregate_name.clone(),
            doc: Some("Map of Bot API method names to their call signatures".into()),
            kind: TypeDefKind::Interface {
                properties: methods.iter().map(|m| m.signature.clone()).collect(),
            },
        }
    }
}

fn wrapper_type(kind: CallKind) -> TsTypeDef {
    let response = || TsType::Ref("Response".into());
    let params = |optional| TsParam {
        name: "params".into(),
        ty: TsType::Ref("Params".into()),
        optional,
    };

    let (doc, type_params, fn_params) = match kind {
        CallKind::WithParams => (
            "Call of a method whose parameters are all required",
            vec!["Params", "Response"],
            vec![params(false)],
        ),
        CallKind::WithOptionalParams => (
            "Call of a method with at least one optional parameter",
            vec!["Params", "Response"],
            vec![params(true)],
        ),
        CallKind::WithoutParams => (
            "Call of a method without parameters",
            vec!["Response"],
            vec![],
        ),
    };

    TsTypeDef {
        name: kind.wrapper_name().to_string(),
        doc: Some(doc.to_string()),
        kind: TypeDefKind::TypeAlias {
            type_params: type_params.into_iter().map(String::from).collect(),
            ty: TsType::Function {
                params: fn_params,
                returns: Box::new(TsType::Generic {
                    name: "Promise".into(),
                    args: vec![response()],
                }),
            },
        },
    }
}
