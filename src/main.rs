//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `lookup` library that handles:
//! - Command-line argument parsing
//! - `-help` / `-version`
//! - Logger and resolver initialization
//! - Exit codes
//!
//! All lookup functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use lookup::config::{normalize_args, EXIT_LOOKUP_FAILED};
use lookup::initialization::{init_logger_with, init_resolver};
use lookup::usage::{render_usage, render_version};
use lookup::{evaluate_exit_code, run, Config, HickoryBackend, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = match Opt::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(opt) => opt,
        Err(e) => {
            eprint!("{e}");
            eprint!("{}", render_usage());
            process::exit(EXIT_LOOKUP_FAILED);
        }
    };

    if opt.help {
        print!("{}", render_usage());
        return Ok(());
    }

    if opt.version {
        println!("{}", render_version());
        return Ok(());
    }

    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let backend = HickoryBackend::new(init_resolver(config.timeout()));

    let mut stdout = io::stdout().lock();
    let report = run(&config, &backend, &mut stdout)
        .await
        .context("Failed to write lookup output")?;
    stdout.flush().context("Failed to flush output")?;

    let code = evaluate_exit_code(config.fail_on, &report);
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
