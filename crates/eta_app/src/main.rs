mod cli;
mod config;
mod platform;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use eta_logging::eta_info;

use cli::Cli;
use config::EstimatorConfig;
use platform::app::{Controller, Outcome, RunMode};
use platform::clock::SystemClock;
use platform::sink::TerminalSink;
use platform::ticker::ThreadTicker;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = EstimatorConfig::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_overrides(&cli);
    config.validate()?;
    platform::logging::initialize(config.log_destination, config.log_level.into());

    let raw = read_input(cli.input.as_deref())?;
    eta_info!(
        "Read {} bytes of status input, interval={}ms",
        raw.len(),
        config.tick_interval_ms
    );

    let mode = if cli.once { RunMode::Once } else { RunMode::Poll };
    let mut controller = Controller::new(
        SystemClock,
        ThreadTicker::new(config.tick_interval()),
        TerminalSink::new(io::stdout(), config.set_terminal_title),
    );
    Ok(match controller.run(raw, mode) {
        Outcome::Completed | Outcome::Stopped => ExitCode::SUCCESS,
        Outcome::Failed(message) => {
            eta_info!("Exiting after rejected input: {}", message);
            ExitCode::FAILURE
        }
    })
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("reading status document {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("reading status document from stdin")?;
            Ok(raw)
        }
    }
}
