//! TypeScript code emission via the Emit trait.
//!
//! Each IR type implements `Emit` for composable string building. Output is
//! indented with two spaces and needs no further formatting to be valid.

use super::types::{
    TsImport, TsLiteral, TsModule, TsParam, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind,
};
use crate::naming::{escape_ts_string, quote_if_needed};

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the IR node to its TypeScript string representation.
    fn emit(&self) -> String;
}

// =============================================================================
// Primitive Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_ts_string(s)),
        }
    }
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap complex types in parentheses
                let needs_parens = match &**inner {
                    TsType::Union(types) => types.len() > 1,
                    TsType::Function { .. } => true,
                    _ => false,
                };
                if needs_parens {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) if types.is_empty() => "never".to_string(),
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
            TsType::Generic { name, args } => {
                let args_str = args.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
                format!("{name}<{args_str}>")
            }
            TsType::Function { params, returns } => {
                let params_str = params.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
                format!("({params_str}) => {}", returns.emit())
            }
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, opt, self.ty.emit())
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let mut output = self
            .doc
            .as_deref()
            .map(|doc| emit_doc(doc, "  "))
            .unwrap_or_default();
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        output.push_str(&format!("  {key}{opt}: {};\n", self.ty.emit()));
        output
    }
}

/// Render a doc comment at the given indentation.
///
/// A single line renders as `/** text */`; anything longer becomes a block
/// with one ` * ` line per source line.
fn emit_doc(doc: &str, indent: &str) -> String {
    let doc = doc.replace("*/", "*\\/");
    let lines: Vec<&str> = doc.lines().collect();
    if let [line] = lines.as_slice() {
        return format!("{indent}/** {line} */\n");
    }

    let mut output = format!("{indent}/**\n");
    for line in lines {
        if line.is_empty() {
            output.push_str(&format!("{indent} *\n"));
        } else {
            output.push_str(&format!("{indent} * {line}\n"));
        }
    }
    output.push_str(&format!("{indent} */\n"));
    output
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        let mut output = self
            .doc
            .as_deref()
            .map(|doc| emit_doc(doc, ""))
            .unwrap_or_default();
        match &self.kind {
            TypeDefKind::Interface { properties } if properties.is_empty() => {
                output.push_str(&format!("export interface {} {{}}\n", self.name));
            }
            TypeDefKind::Interface { properties } => {
                output.push_str(&format!("export interface {} {{\n", self.name));
                for prop in properties {
                    output.push_str(&prop.emit());
                }
                output.push_str("}\n");
            }
            TypeDefKind::TypeAlias { type_params, ty } => {
                let params_str = if type_params.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", type_params.join(", "))
                };
                output.push_str(&format!(
                    "export type {}{} = {};\n",
                    self.name,
                    params_str,
                    ty.emit()
                ));
            }
        }
        output
    }
}

// =============================================================================
// Imports
// =============================================================================

impl Emit for TsImport {
    fn emit(&self) -> String {
        let type_keyword = if self.type_only { "type " } else { "" };
        format!(
            "import {}* as {} from \"{}\";\n",
            type_keyword, self.namespace, self.from
        )
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        if let Some(header) = &self.header {
            output.push_str(&format!("/** {header} */\n"));
        }

        if !self.imports.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            for import in &self.imports {
                output.push_str(&import.emit());
            }
        }

        // Consecutive bare aliases (enum unions) stay grouped; everything
        // else is separated by a blank line.
        let mut previous: Option<&TsTypeDef> = None;
        for type_def in &self.types {
            let grouped = previous
                .is_some_and(|prev| prev.is_plain_alias() && type_def.is_plain_alias());
            if !output.is_empty() && !grouped {
                output.push('\n');
            }
            output.push_str(&type_def.emit());
            previous = Some(type_def);
        }

        if !self.reexports.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            for module in &self.reexports {
                output.push_str(&format!("export * from \"{module}\";\n"));
            }
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
