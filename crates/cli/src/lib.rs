//! Command-line front end for `tgtypes-core`: fetches the Bot API schema,
//! writes the generated declaration files and checks them for staleness.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod commands;
mod config;
mod output;
mod source;

use commands::check::CheckArgs;
use commands::generate::GenerateArgs;
use commands::inspect::InspectArgs;

/// Crates whose events a plain `TGTYPES_LOG` level applies to.
const CRATE_ROOTS: [&str; 2] = ["tgtypes_cli", "tgtypes_core"];

#[derive(Parser)]
#[command(
    name = "tgtypes",
    version,
    about = "TypeScript declarations for the Telegram Bot API"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declaration files from the Bot API schema
    Generate(GenerateArgs),
    /// Check that generated files on disk are up to date
    Check(CheckArgs),
    /// Print a summary of the Bot API schema
    Inspect(InspectArgs),
}

/// Parse `args` (including the binary name) and run the selected command.
///
/// Returns the process exit code.
pub async fn run_cli_async(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => commands::generate::run(args).await,
            Some(Commands::Check(args)) => commands::check::run(args).await,
            Some(Commands::Inspect(args)) => commands::inspect::run(args).await,
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Install the stderr log subscriber.
///
/// `TGTYPES_LOG` takes a plain level ("trace", "debug", "info", "warn",
/// "error") applied to this tool's crates, or a full filter spec like
/// "tgtypes_core=trace,reqwest=debug".
pub fn init_tracing() {
    let filter = match std::env::var("TGTYPES_LOG") {
        Ok(level) if is_plain_level(&level) => crate_filter(&level),
        Ok(spec) => spec,
        Err(_) => crate_filter("info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    )
}

fn crate_filter(level: &str) -> String {
    CRATE_ROOTS
        .iter()
        .map(|root| format!("{root}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
