//! TypeScript declaration IR and its rendering.
//!
//! Emitters build [`TsTypeDef`]s out of [`TsType`] expressions; the [`Emit`]
//! trait turns them into source text. Emission is purely mechanical string
//! building, so everything interesting is testable on the structured form.

mod emit;
mod types;

pub use emit::Emit;
pub use types::{
    TsImport, TsLiteral, TsModule, TsParam, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind,
};
