//! TypeScript IR types for declaration generation.
//!
//! - TsType: type expressions (primitives, arrays, unions, references, ...)
//! - TsTypeDef: top-level `interface` and `type` declarations
//! - TsModule: a whole emitted file

/// TypeScript type expression
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Literal type: "foo"
    Literal(TsLiteral),
    /// Named type reference, possibly namespace-qualified: "Objects.TelegramUser"
    Ref(String),
    /// Generic application: CallAPI<A, B>
    Generic {
        /// Generic type name.
        name: String,
        /// Type arguments, in order.
        args: Vec<TsType>,
    },
    /// Function type: (params: P) => R
    Function {
        /// Parameters, in order.
        params: Vec<TsParam>,
        /// Return type.
        returns: Box<TsType>,
    },
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsLiteral {
    /// Double-quoted string literal.
    String(String),
}

/// Interface member or object-type property
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    /// Property key; quoted on emission when it is not an identifier.
    pub name: String,
    /// Property type.
    pub ty: TsType,
    /// Emits the `?` marker.
    pub optional: bool,
    /// Doc comment text; newlines split it into comment lines.
    pub doc: Option<String>,
}

/// Function type parameter
#[derive(Debug, Clone, PartialEq)]
pub struct TsParam {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TsType,
    /// Emits the `?` marker.
    pub optional: bool,
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefKind {
    /// interface Foo { ... }
    Interface {
        /// Members, in declaration order.
        properties: Vec<TsProp>,
    },
    /// type Foo<T> = ...
    TypeAlias {
        /// Generic parameter names.
        type_params: Vec<String>,
        /// Aliased type.
        ty: TsType,
    },
}

/// Exported top-level declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeDef {
    /// Declared name.
    pub name: String,
    /// Doc comment text; newlines split it into comment lines.
    pub doc: Option<String>,
    /// Declaration body.
    pub kind: TypeDefKind,
}

/// Namespace import: `import type * as Objects from "./objects";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsImport {
    /// Local namespace alias.
    pub namespace: String,
    /// Module specifier.
    pub from: String,
    /// Whether this is a type-only import
    pub type_only: bool,
}

/// Complete emitted file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TsModule {
    /// Single-line header comment text.
    pub header: Option<String>,
    /// Namespace imports
    pub imports: Vec<TsImport>,
    /// Declarations, in emission order
    pub types: Vec<TsTypeDef>,
    /// Module specifiers re-exported with `export *`
    pub reexports: Vec<String>,
}

impl TsTypeDef {
    /// `type Name = ...` without generic parameters.
    pub fn alias(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            doc: None,
            kind: TypeDefKind::TypeAlias {
                type_params: Vec::new(),
                ty,
            },
        }
    }

    /// Whether this declaration is a bare alias with no doc comment.
    pub(crate) fn is_plain_alias(&self) -> bool {
        self.doc.is_none() && matches!(self.kind, TypeDefKind::TypeAlias { .. })
    }
}

impl TsType {
    /// Union of string literal types, in the given order.
    pub fn string_literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TsType::Union(
            values
                .into_iter()
                .map(|v| TsType::Literal(TsLiteral::String(v.into())))
                .collect(),
        )
    }
}
