use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::{Level, info};

use multiplikation::{
    PageLayout, SeededRng, WeightTable, Worksheet, build_exercise_set, render_worksheet,
    resolve_output_path,
};

/// Upper bound for the free operand when the level does not exceed it.
const MAX_FACTOR: u32 = 10;

/// Generate a printable multiplication worksheet as a PDF.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty level; every factor up to it is paired with it at least once.
    level: u32,

    /// Seed for the exercise generator; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Output file; defaults to <LEVEL>.pdf.
    output_file: Vec<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.level < 1 {
        eprintln!("You cannot select a level < 1.");
        process::exit(-3);
    }
    if cli.output_file.len() > 1 {
        eprintln!("Please specify only one output file.");
        process::exit(-2);
    }

    if let Err(err) = run(&cli) {
        eprintln!("worksheet generation failed: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let output = resolve_output_path(cli.level, cli.output_file.first().map(PathBuf::as_path));

    let mut rng = SeededRng::new(cli.seed);
    let weights = WeightTable::default();
    let layout = PageLayout::default();
    let max_factor = MAX_FACTOR.max(cli.level);

    let exercises = build_exercise_set(
        cli.level,
        max_factor,
        layout.cell_count(),
        &weights,
        &mut rng,
    )?;

    let sheet = Worksheet {
        title: format!("Multiplikation {}", cli.level),
        footer: format!(
            "Multiplikation v{} {{max_factor={}, seed={}}}",
            env!("CARGO_PKG_VERSION"),
            max_factor,
            rng.seed()
        ),
        exercises: &exercises,
        layout,
    };
    render_worksheet(&sheet, &output)?;

    info!(path = %output.display(), seed = rng.seed(), "worksheet written");
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
