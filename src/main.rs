//! Shrdlite - Entry Point
//!
//! Loads a world snapshot and the parser's candidate parses for one
//! utterance, interprets them, asks on stdin when several readings hold,
//! and prints the resulting goal.

use clap::Parser;
use shrdlite::core::error::{InterpretError, Result};
use shrdlite::core::InterpreterConfig;
use shrdlite::interpreter::{Interpreter, SelectionPrompt};
use shrdlite::parse::{load_parses, parses_from_json};
use shrdlite::rules::physics_for;
use shrdlite::world::{DescriptorMatcher, WorldLoader};

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Interpret parsed blocks-world commands into planner goals
#[derive(Parser, Debug)]
#[command(name = "shrdlite")]
#[command(about = "Turn parsed blocks-world commands into goal formulas")]
struct Args {
    /// World snapshot (JSON)
    #[arg(long, default_value = "data/worlds/small.json")]
    world: PathBuf,

    /// Candidate parses for one utterance (JSON list); "-" reads stdin
    #[arg(long)]
    parses: PathBuf,

    /// Interpreter config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the chosen interpretation as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Asks on stdin, numbering the choices from 0
struct StdinPrompt;

impl SelectionPrompt for StdinPrompt {
    fn prompt_selection(&mut self, choices: &[String]) -> Result<Option<usize>> {
        println!("More than one parse gave an interpretation!");
        for (i, choice) in choices.iter().enumerate() {
            println!("  {}) {}", i, choice);
        }
        print!("Enter the number that corresponds to your parse: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().parse().ok())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match InterpreterConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => InterpreterConfig::default(),
    };

    // Initialize tracing for logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_user_facing() => {
            println!("{}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &InterpreterConfig) -> Result<()> {
    let world = WorldLoader::load_from_file(&args.world)?;
    let parses = if args.parses.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        parses_from_json(&json)?
    } else {
        load_parses(&args.parses)?
    };
    tracing::info!(parses = parses.len(), world = %args.world.display(), "Interpreting");

    let physics = physics_for(config.physics);
    let interpreter =
        Interpreter::new(&world, &DescriptorMatcher, physics.as_ref()).with_config(config);

    let results = interpreter.interpret_interactive(parses, &mut StdinPrompt)?;
    let chosen = results
        .into_iter()
        .next()
        .ok_or(InterpretError::NoInterpretation)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chosen)?);
    } else {
        println!("Interpretation: {}", chosen.goal);
    }
    Ok(())
}
