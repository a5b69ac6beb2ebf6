//! hello-log
//!
//! Installs a debug-level subscriber on stderr and emits one greeting record.

use clap::Parser;

use hello_log::config::LoggingConfig;
use hello_log::{greeting, observability};

#[derive(Parser)]
#[command(name = "hello-log", version)]
#[command(about = "Emit a single debug-level greeting", long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();

    // Written once, before any record is emitted
    observability::logging::init(&LoggingConfig::default())?;

    greeting::greet();
    Ok(())
}
