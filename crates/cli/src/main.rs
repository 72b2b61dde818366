//! Branch-prediction pipeline animation CLI.
//!
//! This binary ties the simulation core to a crossterm front end. It performs:
//! 1. **Configuration:** Load a JSON timing file or fall back to the built-in defaults.
//! 2. **Logging:** Optional file-backed tracing; the terminal itself stays clean.
//! 3. **Animation:** Run the interactive tab loop until the viewer quits.
//! 4. **Summary:** Print per-variant run statistics once the terminal is restored.

mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use pipevis_core::config::{Config, ConfigError};
use pipevis_core::controller::CycleController;

#[derive(Parser, Debug)]
#[command(
    name = "pipevis",
    version,
    about = "Animated branch-prediction pipeline",
    long_about = "Animate how a classic instruction pipeline handles a conditional jump\nunder three branch handling strategies: stall until resolution, predict\nnot taken, and predict taken.\n\nNumber keys switch strategy tabs; every switch restarts the incoming run\nfrom its initial layout.\n\nExamples:\n  pipevis\n  pipevis --period-ms 250\n  pipevis --config timing.json --log pipevis.log"
)]
struct Cli {
    /// JSON timing configuration (built-in defaults when omitted).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the tick period in milliseconds.
    #[arg(long, value_name = "MS")]
    period_ms: Option<u64>,

    /// Append tracing output to this file.
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

/// Failures the binary reports before exiting.
#[derive(Debug, Error)]
enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("log file: {0}")]
    Log(#[source] std::io::Error),

    #[error("terminal: {0}")]
    Terminal(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("pipevis: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = match cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(ms) = cli.period_ms {
        config.tick_period_ms = ms;
    }

    if let Some(path) = cli.log.as_deref() {
        init_tracing(path).map_err(AppError::Log)?;
    }
    tracing::info!(
        period_ms = config.tick_period_ms,
        first_tick_delay_ms = config.first_tick_delay_ms,
        variant = config.initial_variant.label(),
        "starting animation"
    );

    let mut controller = CycleController::new(&config);
    ui::run(&mut controller, &config)?;

    print_summary(&controller);
    Ok(())
}

/// Routes tracing events to `path`, appending across runs.
///
/// Never installed unless `--log` is given: stdout belongs to the alternate
/// screen while the animation is up, so events must not land there.
fn init_tracing(path: &Path) -> Result<(), std::io::Error> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pipevis=debug,pipevis_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Prints every tab's counters, whether or not it was ever focused.
fn print_summary(controller: &CycleController) {
    println!();
    println!("==========================================================");
    println!("                     Run Statistics");
    println!("==========================================================");
    for sim in controller.simulators() {
        sim.stats().print(sim.kind().label());
    }
}
