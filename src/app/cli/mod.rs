//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "zerobyte-site")]
#[command(version)]
#[command(
    about = "Generate the ZeroByte terminal portfolio site and zip bundle in the current directory",
    long_about = None
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(e) = run_build() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_build() -> Result<(), AppError> {
    let outcome = crate::app::api::build()?;
    println!("[+] Built site files in {}", outcome.root.display());
    println!("[+] ZIP: {}", outcome.archive_name());
    println!("[+] Build: {}", outcome.build_id);
    Ok(())
}

/// Diagnostics go to stderr; stdout is reserved for the status lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
