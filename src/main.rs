use anyhow::*;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

mod input;
mod output;
mod quiz;
mod settings;

use crate::input::LineInput;
use crate::output::ConsoleOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::Quiz;
use crate::settings::{Settings, DEFAULT_QUIZ_PATH};

#[derive(Parser)]
#[command(version, about = "Asks the questions of a CSV quiz and keeps score")]
struct Cli {
    /// CSV file of `question,answer` rows
    #[arg(short, long = "csv", value_name = "PATH", default_value = DEFAULT_QUIZ_PATH)]
    csv: PathBuf,
}

fn run(settings: Settings) -> Result<()> {
    let definition = QuizDefinition::open(&settings.quiz_path, settings.max_source_bytes)
        .context("Could not load quiz")?;

    let input = LineInput::new(io::stdin().lock());
    let output = ConsoleOutput::new(io::stdout());
    Quiz::new(definition, input, output).run();

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings {
        quiz_path: cli.csv,
        ..Default::default()
    };

    if let Err(e) = run(settings) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
