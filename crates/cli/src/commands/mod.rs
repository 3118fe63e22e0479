pub(crate) mod check;
pub(crate) mod generate;
pub(crate) mod inspect;

use std::future::Future;
use std::path::PathBuf;

use tgtypes_core::{Artifacts, Schema, generate};
use tracing::warn;

use crate::config::Settings;
use crate::source::load_schema;

/// Run a command body, printing its error to stderr.
pub(crate) async fn run_command<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<i32, String>>,
{
    match f().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

pub(crate) fn current_dir() -> Result<PathBuf, String> {
    std::env::current_dir().map_err(|err| format!("Failed to determine working directory: {err}"))
}

/// Report references to undeclared objects: an error in strict mode, a
/// warning per reference otherwise.
pub(crate) fn check_references(schema: &Schema, strict: bool) -> Result<(), String> {
    if strict {
        return schema.validate_references().map_err(|err| err.to_string());
    }
    for reference in schema.unresolved_references() {
        warn!(%reference, "Unresolved object reference.");
    }
    Ok(())
}

/// Load, validate and generate: the pipeline shared by `generate` and `check`.
pub(crate) async fn build_artifacts(settings: &Settings) -> Result<Artifacts, String> {
    let schema = load_schema(&settings.source).await?;
    check_references(&schema, settings.strict)?;
    generate(&schema, &settings.generator)
        .map_err(|err| format!("Failed to generate declarations: {err}"))
}
