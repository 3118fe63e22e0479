//! Properties and arguments to interface members.

use crate::config::{GeneratorConfig, Owner};
use crate::remap::TypeRemapper;
use crate::schema::Property;
use crate::ts::{TsProp, TsType, TsTypeDef};

/// Converts the fields of one object or method.
#[derive(Debug, Clone, Copy)]
pub struct PropertyConverter<'a> {
    config: &'a GeneratorConfig,
    remapper: TypeRemapper<'a>,
}

impl<'a> PropertyConverter<'a> {
    /// Create a converter bound to a configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            remapper: TypeRemapper::new(config),
        }
    }

    /// The remapper this converter resolves field types with.
    pub fn remapper(&self) -> TypeRemapper<'a> {
        self.remapper
    }

    /// Convert a single property to an interface member.
    ///
    /// Enumerated properties resolve to the name of their synthesized union;
    /// declaring that union is up to the caller (see [`Self::enum_unions`]).
    pub fn convert(&self, owner: Owner<'_>, property: &Property) -> TsProp {
        let description = property.description.trim_end();
        TsProp {
            name: property.name.clone(),
            ty: self
                .remapper
                .resolve(&property.kind, owner, Some(&property.name)),
            optional: !property.required,
            doc: (!description.is_empty()).then(|| description.to_string()),
        }
    }

    /// Convert properties one-to-one, preserving order.
    pub fn convert_many(&self, owner: Owner<'_>, properties: &[Property]) -> Vec<TsProp> {
        properties
            .iter()
            .map(|property| self.convert(owner, property))
            .collect()
    }

    /// Union declarations for every enumerated property, in property order.
    pub fn enum_unions(&self, owner: Owner<'_>, properties: &[Property]) -> Vec<TsTypeDef> {
        properties
            .iter()
            .filter_map(|property| {
                let values = property.kind.enumeration()?;
                Some(TsTypeDef::alias(
                    self.config.enum_union_name(owner, &property.name),
                    TsType::string_literals(values),
                ))
            })
            .collect()
    }
}
