//! `tgtypes` binary.

#[tokio::main]
async fn main() {
    tgtypes_cli::init_tracing();
    let code = tgtypes_cli::run_cli_async(std::env::args().collect()).await;
    std::process::exit(code);
}
