use std::path::Path;

use clap::Args;
use console::style;
use tracing::info;

use crate::commands::{build_artifacts, current_dir, run_command};
use crate::config::{OutputArgs, Settings, SourceArgs};
use crate::output::stale_files;

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub(crate) async fn run(args: CheckArgs) -> i32 {
    run_command(move || async move {
        let cwd = current_dir()?;
        run_inner(&args, &cwd).await
    })
    .await
}

/// Exit code 0 when every file on disk is current, 1 otherwise.
pub(crate) async fn run_inner(args: &CheckArgs, cwd: &Path) -> Result<i32, String> {
    let settings = Settings::resolve(&args.source, &args.output, cwd)?;
    let artifacts = build_artifacts(&settings).await?;
    let stale = stale_files(&settings.out_dir, &artifacts, &settings.extension).await?;

    if stale.is_empty() {
        info!(out_dir = %settings.out_dir.display(), "Declarations are up to date.");
        println!(
            "{} Declarations in {} match Bot API v{}",
            style("✓").green().bold(),
            settings.out_dir.display(),
            artifacts.version
        );
        return Ok(0);
    }

    for file in &stale {
        print!("{}", file.render_diff());
    }
    let names: Vec<String> = stale.iter().map(|file| file.artifact.to_string()).collect();
    println!(
        "{} Out of date: {}; run `tgtypes generate` to update",
        style("✗").red().bold(),
        names.join(", ")
    );
    Ok(1)
}
