//! Binary crate for the `climate` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and chat
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod interactive;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::init_from_env(env);

    let cmd = cli::Cli::parse();
    cmd.run().await
}
