//! Streak Analyzer CLI
//!
//! Regenerates outcome histories from a seed chain or loads them from CSV,
//! then prints the streak analysis.

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use streak_analyzer::{
    config::{ConfigError, FileConfig},
    generation::{GenerationError, HashChainGenerator, KeyVariant},
    report::{analyze, to_json, AnalysisError, AnalysisReport, LengthGroupView, TextReport},
    source::{history_file_name, latest_csv, save_history, OutcomeReader, SourceError},
};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "streak-analyzer", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Regenerate outcomes from a seed chain and analyze them.
    Generate(GenerateArgs),
    /// Analyze outcomes loaded from a CSV file.
    Analyze(AnalyzeArgs),
    /// Print the outcome of the single round played with a seed.
    Verify {
        /// Round seed (at least 64 hex characters).
        #[arg(long)]
        seed: String,
        /// Draw against the alternate key material.
        #[arg(long)]
        alternate: bool,
    },
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Outcomes strictly below this value form streaks.
    #[arg(long)]
    threshold: Option<f64>,
    /// Number of longest streaks to rank.
    #[arg(long)]
    top_n: Option<usize>,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Server seed starting the chain (at least 64 hex characters).
    #[arg(long)]
    seed: String,
    /// Number of outcomes to generate.
    #[arg(long)]
    count: Option<usize>,
    /// Draw against the alternate key material.
    #[arg(long)]
    alternate: bool,
    /// Do not save the generated history.
    #[arg(long)]
    no_save: bool,
    /// Append the full outcome history to the text report.
    #[arg(long)]
    history: bool,
    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// CSV file to analyze; defaults to the newest CSV in the output directory.
    file: Option<PathBuf>,
    /// Show every streak of this length instead of the full report.
    #[arg(long)]
    length: Option<usize>,
    /// Fail on the first malformed record instead of skipping it.
    #[arg(long)]
    strict: bool,
    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no CSV files found in {0}")]
    NoInput(PathBuf),
    #[error("no streaks of length {0}")]
    NoSuchLength(usize),
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    match cli.command {
        Command::Generate(args) => {
            apply_report_args(&mut config, &args.report)?;
            if let Some(count) = args.count {
                config.generator.count = count;
            }
            if args.alternate {
                config.generator.key_variant = KeyVariant::Alternate;
            }
            config.generator.validate()?;

            info!("Streak Analyzer v{}", streak_analyzer::VERSION);

            let generator = HashChainGenerator::new(config.generator.key_variant);
            let outcomes = generator.generate(&args.seed, config.generator.count)?;
            let report = analyze(&outcomes, &config.analysis)?;

            let history = (args.history || config.output.include_history).then_some(&outcomes[..]);
            print_report(&report, history, args.report.json)?;

            if config.output.save_history && !args.no_save {
                let file_name = history_file_name(&args.seed, &Local::now());
                let path = save_history(
                    &config.output.directory,
                    &file_name,
                    &outcomes,
                    &config.output.value_label,
                )?;
                info!("Outcome history saved to {}", path.display());
            }
        }
        Command::Analyze(args) => {
            apply_report_args(&mut config, &args.report)?;

            let path = match args.file {
                Some(path) => path,
                None => latest_csv(&config.output.directory)?
                    .ok_or_else(|| CliError::NoInput(config.output.directory.clone()))?,
            };

            let loaded = OutcomeReader::new()
                .with_value_label(config.output.value_label.as_str())
                .strict(args.strict)
                .read_path(&path)?;
            if !loaded.skipped.is_empty() {
                warn!(
                    "Skipped {} malformed records in {}",
                    loaded.skipped.len(),
                    path.display()
                );
            }

            let report = analyze(&loaded.outcomes, &config.analysis)?;

            match args.length {
                Some(length) => {
                    let view =
                        LengthGroupView::new(&report, length).ok_or(CliError::NoSuchLength(length))?;
                    print!("{}", view);
                }
                None => {
                    let history = config
                        .output
                        .include_history
                        .then_some(&loaded.outcomes[..]);
                    print_report(&report, history, args.report.json)?;
                }
            }
        }
        Command::Verify { seed, alternate } => {
            let variant = if alternate {
                KeyVariant::Alternate
            } else {
                KeyVariant::Default
            };
            let outcome = HashChainGenerator::new(variant).verify(&seed)?;
            println!("{}", outcome);
        }
    }

    Ok(())
}

fn apply_report_args(config: &mut FileConfig, args: &ReportArgs) -> Result<(), CliError> {
    if let Some(threshold) = args.threshold {
        config.analysis.threshold = threshold;
    }
    if let Some(top_n) = args.top_n {
        config.analysis.top_n = top_n;
    }
    config.analysis.validate()?;
    Ok(())
}

fn print_report(
    report: &AnalysisReport,
    history: Option<&[f64]>,
    json: bool,
) -> Result<(), CliError> {
    if json {
        println!("{}", to_json(report)?);
        return Ok(());
    }

    let text = match history {
        Some(outcomes) => TextReport::new(report).with_history(outcomes),
        None => TextReport::new(report),
    };
    print!("{}", text);
    Ok(())
}
