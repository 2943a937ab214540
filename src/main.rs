#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! douyin-fetch — print Douyin video metadata as one line of JSON.

mod cli;
mod commands;
mod config;
mod fetch;
mod types;
mod video_url;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = OutputCtx::new(cli.pretty);

    if let Err(err) = commands::dispatch(&cli, &ctx) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();
}
