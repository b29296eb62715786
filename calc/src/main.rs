//! Interactive arithmetic calculator.
//!
//! Prompts on stdout, reads answers from stdin, and prints one result line.

use anyhow::{Context, Result};
use clap::Parser;
use ssgs_calc::exit_codes;
use ssgs_calc::io::config::{config_path, load_config};
use ssgs_calc::io::console::Terminal;
use ssgs_calc::logging;
use ssgs_calc::session::run_session;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ssgs-calc",
    version,
    about = "Interactive calculator for sum, sub, mul and div"
)]
struct Cli {}

fn main() {
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    logging::init()?;

    let cwd = std::env::current_dir().context("resolve working directory")?;
    let path = config_path(&cwd);
    let config = load_config(&path)?;
    debug!(path = %path.display(), ?config, "config loaded");

    // One terminal per run; dropped on the way out after the report.
    let mut terminal = Terminal::stdio();
    let report = run_session(&mut terminal, &config)?;
    debug!(?report, "session finished");
    Ok(())
}
