use std::fmt::Write as _;
use std::path::Path;

use clap::Args;
use console::style;
use tgtypes_core::Schema;

use crate::commands::{current_dir, run_command};
use crate::config::{OutputArgs, Settings, SourceArgs};
use crate::source::load_schema;

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub(crate) async fn run(args: InspectArgs) -> i32 {
    run_command(move || async move {
        let cwd = current_dir()?;
        run_inner(&args, &cwd).await
    })
    .await
}

pub(crate) async fn run_inner(args: &InspectArgs, cwd: &Path) -> Result<i32, String> {
    let settings = Settings::resolve(&args.source, &OutputArgs::default(), cwd)?;
    let schema = load_schema(&settings.source).await?;
    print!("{}", report(&schema));
    Ok(0)
}

/// Human-readable summary of a schema.
fn report(schema: &Schema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", style("Bot API").bold(), schema.version);
    if let Some(date) = schema.recent_changes {
        let _ = writeln!(
            out,
            "  released   {:04}-{:02}-{:02}",
            date.year, date.month, date.day
        );
    }
    let _ = writeln!(out, "  objects    {}", schema.objects.len());
    let _ = writeln!(out, "  methods    {}", schema.methods.len());

    let unresolved = schema.unresolved_references();
    if unresolved.is_empty() {
        let _ = writeln!(out, "  references {}", style("all resolved").green());
    } else {
        let _ = writeln!(
            out,
            "  references {}",
            style(format!("{} unresolved", unresolved.len())).yellow()
        );
        for reference in &unresolved {
            let _ = writeln!(out, "    {reference}");
        }
    }
    out
}
