//! Object declarations for the objects artifact.

use crate::config::{GeneratorConfig, Owner};
use crate::convert::PropertyConverter;
use crate::schema::Object;
use crate::ts::{TsProp, TsTypeDef, TypeDefKind};

/// Emits one interface (plus enum unions) per schema object.
#[derive(Debug, Clone, Copy)]
pub struct ObjectEmitter<'a> {
    config: &'a GeneratorConfig,
    converter: PropertyConverter<'a>,
}

impl<'a> ObjectEmitter<'a> {
    /// Create an emitter bound to a configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            converter: PropertyConverter::new(config),
        }
    }

    /// Declarations for one object: its enum unions in property order,
    /// followed by the interface itself.
    ///
    /// An object without properties becomes an empty interface and nothing
    /// else.
    pub fn generate(&self, object: &Object) -> Vec<TsTypeDef> {
        let owner = Owner::object(&object.name);
        let interface = |properties: Vec<TsProp>| TsTypeDef {
            name: self.config.object_type_name(&object.name),
            doc: doc_comment(&object.description, object.documentation_link.as_deref()),
            kind: TypeDefKind::Interface { properties },
        };

        if object.properties.is_empty() {
            return vec![interface(Vec::new())];
        }

        let mut declarations = self.converter.enum_unions(owner, &object.properties);
        declarations.push(interface(
            self.converter.convert_many(owner, &object.properties),
        ));
        declarations
    }

    /// Declarations for every object, in schema order.
    pub fn generate_many(&self, objects: &[Object]) -> Vec<TsTypeDef> {
        objects
            .iter()
            .flat_map(|object| self.generate(object))
            .collect()
    }
}

/// Description followed by an `@see` link, when either is present.
pub(crate) fn doc_comment(description: &str, link: Option<&str>) -> Option<String> {
    let description = description.trim_end();
    match (description.is_empty(), link) {
        (true, None) => None,
        (true, Some(link)) => Some(format!("@see {link}")),
        (false, None) => Some(description.to_string()),
        (false, Some(link)) => Some(format!("{description}\n\n@see {link}")),
    }
}
