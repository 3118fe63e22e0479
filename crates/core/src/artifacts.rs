//! Assembly of the generated declaration files.

use std::fmt;

use tracing::{debug, info};

use crate::aggregate::AggregateEmitter;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::methods::MethodEmitter;
use crate::objects::ObjectEmitter;
use crate::schema::{Schema, Version};
use crate::symbols::SymbolTable;
use crate::ts::{Emit, TsImport, TsModule, TsTypeDef};

/// One of the generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Object interfaces and their enum unions.
    Objects,
    /// Parameter interfaces and their enum unions.
    Params,
    /// Call wrapper types and the aggregate interface.
    Methods,
    /// Re-exports of the three modules above.
    Index,
}

impl Artifact {
    /// All artifacts, in the order they are written.
    pub const ALL: [Artifact; 4] = [
        Artifact::Objects,
        Artifact::Params,
        Artifact::Methods,
        Artifact::Index,
    ];

    /// File name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Artifact::Objects => "objects",
            Artifact::Params => "params",
            Artifact::Methods => "methods",
            Artifact::Index => "index",
        }
    }

    /// File name with the given extension, e.g. `objects.d.ts`.
    pub fn file_name(self, extension: &str) -> String {
        format!("{}.{extension}", self.file_stem())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Rendered contents of every artifact for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Bot API version the schema declares.
    pub version: Version,
    /// Number of declarations across all artifacts.
    pub symbols: usize,
    /// Objects artifact.
    pub objects: String,
    /// Params artifact.
    pub params: String,
    /// Methods artifact.
    pub methods: String,
    /// Index artifact.
    pub index: String,
}

impl Artifacts {
    /// Text of a single artifact.
    pub fn get(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Objects => &self.objects,
            Artifact::Params => &self.params,
            Artifact::Methods => &self.methods,
            Artifact::Index => &self.index,
        }
    }

    /// Every artifact with its text, in write order.
    pub fn iter(&self) -> impl Iterator<Item = (Artifact, &str)> + '_ {
        Artifact::ALL
            .into_iter()
            .map(move |artifact| (artifact, self.get(artifact)))
    }
}

/// Generate every artifact for `schema`.
///
/// Output is a pure function of the schema and configuration. Fails only when
/// two declarations, or two aggregate entries, would share a name.
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> Result<Artifacts, GenerateError> {
    let header = format!("Based on Bot API v{}", schema.version);
    let mut symbols = SymbolTable::default();

    let object_emitter = ObjectEmitter::new(config);
    let mut object_types = Vec::new();
    for object in &schema.objects {
        let defs = object_emitter.generate(object);
        register_all(&mut symbols, &defs, &format!("object `{}`", object.name))?;
        object_types.extend(defs);
    }

    let declarations = MethodEmitter::new(config).generate_many(&schema.methods);
    let mut param_types = Vec::new();
    for method in &declarations {
        let origin = format!("method `{}`", method.name);
        register_all(&mut symbols, &method.declarations, &origin)?;
        symbols.register(
            &format!("{}.{}", config.aggregate_name, method.name),
            origin,
        )?;
        param_types.extend(method.declarations.iter().cloned());
    }

    let aggregate_emitter = AggregateEmitter::new(config);
    let mut method_types = aggregate_emitter.wrapper_types();
    method_types.push(aggregate_emitter.generate_many(&declarations));
    register_all(&mut symbols, &method_types, "the methods artifact")?;

    let objects_import = TsImport {
        namespace: config.objects_namespace.clone(),
        from: config.objects_module.clone(),
        type_only: true,
    };
    let params_import = TsImport {
        namespace: config.params_namespace.clone(),
        from: config.params_module.clone(),
        type_only: true,
    };

    let objects = TsModule {
        header: Some(header.clone()),
        types: object_types,
        ..TsModule::default()
    };
    let params = TsModule {
        header: Some(header.clone()),
        imports: vec![objects_import.clone()],
        types: param_types,
        ..TsModule::default()
    };
    let methods = TsModule {
        header: Some(header.clone()),
        imports: vec![objects_import, params_import],
        types: method_types,
        ..TsModule::default()
    };
    let index = TsModule {
        header: Some(header),
        reexports: vec![
            config.objects_module.clone(),
            config.params_module.clone(),
            config.methods_module.clone(),
        ],
        ..TsModule::default()
    };

    debug!(
        objects = objects.types.len(),
        params = params.types.len(),
        methods = methods.types.len(),
        "Assembled artifact modules."
    );

    let artifacts = Artifacts {
        version: schema.version,
        symbols: symbols.len(),
        objects: objects.emit(),
        params: params.emit(),
        methods: methods.emit(),
        index: index.emit(),
    };

    info!(
        version = %artifacts.version,
        objects = schema.objects.len(),
        methods = schema.methods.len(),
        symbols = artifacts.symbols,
        "Generated declarations."
    );

    Ok(artifacts)
}

fn register_all(
    symbols: &mut SymbolTable,
    defs: &[TsTypeDef],
    origin: &str,
) -> Result<(), GenerateError> {
    defs.iter()
        .try_for_each(|def| symbols.register(&def.name, origin))
}
