//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the forecast lookup
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    let cmd = cli::Cli::parse();
    if let Err(err) = cmd.run().await {
        // Diagnostics go to stdout, matching the rest of the output.
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}
