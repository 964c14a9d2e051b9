use crate::config::Config;
use crate::display::{display_average, display_sorted};
use crate::input::Console;
use crate::model::Roster;
use clap::{ArgAction, Parser};
use eyre::{Result, WrapErr};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level, info};

mod config;
mod display;
mod input;
mod model;
mod stats;

#[derive(Parser)]
#[command(version, author, about)]
struct Args {
    /// Use FILE instead of gradesort.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

/// Collect the students, sort them and write the report.
fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> Result<Roster> {
    let mut roster = {
        let mut console = Console::new(input, &mut *output);
        let n = console.read_count()?;
        console.collect(n)?
    };
    roster.sort_descending();
    info!(students = roster.len(), "roster sorted by grade");
    display_sorted(output, &roster, config).wrap_err("cannot write sorted students")?;
    display_average(output, &roster, config).wrap_err("cannot write class average")?;
    Ok(roster)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = Config::load(args.config.as_deref())?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(stdin.lock(), &mut stdout, &config)?;
    stdout.flush()?;
    Ok(())
}
