//! Terminal Game of Life runner (default binary).
//!
//! Parses the command line, seeds the grid, then runs the simulation loop with
//! crossterm for keypress polling and screen output.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;

use tui_life::engine::{RunOutcome, Simulation, ThreadPacer};
use tui_life::input::KeyPoller;
use tui_life::term::{RenderMode, TerminalRenderer};
use tui_life::types::{parse_args, CliCommand, LifeConfig, USAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        CliCommand::Help => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        CliCommand::Run(config) => config,
    };
    log::info!("configuration: {config:?}");

    match run(&config) {
        Ok(outcome) => {
            log::info!(
                "finished after {} generations ({:?})",
                outcome.generations,
                outcome.reason
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &LifeConfig) -> Result<RunOutcome> {
    let mut sim = Simulation::from_config(config)?;

    let mut input = KeyPoller::new();

    // Raw mode only changes how the terminal treats output written to it.
    let raw_terminal = input.is_active() && io::stdout().is_terminal();
    let mut renderer = TerminalRenderer::new(RenderMode::from_sequence_flag(config.sequence))
        .with_raw_terminal(raw_terminal);
    renderer.enter()?;

    let result = sim.run(&mut renderer, &mut input, &mut ThreadPacer);

    // Leave raw mode before anything else is printed.
    drop(input);
    let _ = renderer.exit();
    result
}
