//! Command line front end: read an instance, place towers with the chosen
//! solver, and write the validated solution.

use clap::{ArgAction, Parser};
use log::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tower_placer::*;

/// Solve a tower placement instance.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Instance file to read. Use - for stdin.
    input: PathBuf,

    /// Solution file to write. Use - for stdout.
    #[arg(default_value = "-")]
    output: PathBuf,

    /// Solver to run.
    #[arg(long, value_parser = parse_solver)]
    solver: SolverKind,

    /// Number of coverage groups the set-cover solver compares per tower.
    #[arg(long, default_value_t = constants::DEFAULT_SET_COVER_POOL_SIZE)]
    pool_size: usize,

    /// Log more detail to stderr. Repeat for debug and trace output.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_solver(name: &str) -> Result<SolverKind, String> {
    name.parse().map_err(|e: SolveError| {
        let known: Vec<&str> = SolverKind::ALL.iter().map(|k| k.name()).collect();
        format!("{} (expected one of: {})", e, known.join(", "))
    })
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> io::Result<String> {
    if is_stdio(path) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(path: &Path, text: &str) -> io::Result<()> {
    if is_stdio(path) {
        io::stdout().write_all(text.as_bytes())
    } else {
        fs::write(path, text)
    }
}

fn run(args: &Args) -> Result<(), String> {
    let text = read_input(&args.input).map_err(|e| format!("{}: {}", args.input.display(), e))?;
    let instance: Instance = text.parse().map_err(|e: ParseError| e.to_string())?;

    info!(
        "{} cities on a {}x{} grid, solving with {}",
        instance.num_cities(),
        instance.grid_side_length(),
        instance.grid_side_length(),
        args.solver
    );

    let planner = PlannerBuilder::new()
        .solver(args.solver)
        .pool_size(args.pool_size)
        .build();
    let solution = planner.plan(&instance).map_err(|e| e.to_string())?;

    info!(
        "placed {} towers, penalty {}",
        solution.towers().len(),
        solution.penalty()
    );

    write_output(&args.output, &solution.to_string())
        .map_err(|e| format!("{}: {}", args.output.display(), e))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG, when set, overrides the level chosen by -v.
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("tower-placer: {}", msg);
            ExitCode::FAILURE
        }
    }
}
