mod cli;

use clap::Parser;
use phonescore::pages::Page;
use phonescore::types::config::{AppConfig, FormatSetting, OutputConfig};
use phonescore::types::report::Prediction;
use phonescore::{config, input, pages, report};
use phonescore::{AppError, AttributeRecord, HeuristicScorer, Scorer};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    output: &OutputConfig,
) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
        None => match output.format {
            Some(FormatSetting::Json) => report::OutputFormat::Json,
            Some(FormatSetting::Text) => report::OutputFormat::Text,
            Some(FormatSetting::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn predict(cmd: &cli::PredictCommand, loaded: Option<&AppConfig>) -> Result<String, AppError> {
    let output = loaded.map(AppConfig::output).unwrap_or_default();

    let mut answers = loaded
        .map(AppConfig::predictor_defaults)
        .unwrap_or_default();
    if let Some(path) = &cmd.input {
        answers = answers.overlay(input::read_record_input(path)?);
    }
    answers = answers.overlay(cmd.record_input());
    let record = answers.resolve(AttributeRecord::default());

    let violations = record.violations();
    if !violations.is_empty() {
        if cmd.strict || output.strict {
            return Err(AppError::OutOfRange(violations.join(", ")));
        }
        for violation in &violations {
            tracing::warn!(%violation, "clamping out-of-range input");
        }
    }
    let record = record.clamped();

    let scorer = HeuristicScorer::default();
    let breakdown = scorer.explain(&record);
    for contribution in &breakdown.contributions {
        tracing::debug!(
            attribute = ?contribution.attribute,
            weight = contribution.weight.as_f64(),
            "contribution"
        );
    }
    tracing::info!(
        scorer = scorer.name(),
        score = breakdown.result.score,
        level = %breakdown.result.level,
        "scored record"
    );

    let prediction = Prediction::new(
        scorer.name(),
        record,
        breakdown,
        cmd.explain || output.explain,
    )
    .with_adjustments(violations);
    report::render_prediction(&prediction, resolve_format(cmd.format, &output))
}

fn render_static(
    page: Page,
    cmd: &cli::PageCommand,
    loaded: Option<&AppConfig>,
) -> Result<String, AppError> {
    let output = loaded.map(AppConfig::output).unwrap_or_default();
    report::render_page(&page, resolve_format(cmd.format, &output))
}

fn run() -> Result<i32, AppError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        section = ?cli.command.section(),
        "phonescore"
    );

    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;
    if loaded.is_none() {
        tracing::debug!("no config layers found; using built-in defaults");
    }

    let loaded = loaded.as_ref();
    let rendered = match &cli.command {
        cli::Commands::Predict(cmd) => predict(cmd, loaded)?,
        cli::Commands::Overview(cmd) => render_static(pages::overview::page(), cmd, loaded)?,
        cli::Commands::Analysis(cmd) => render_static(pages::analysis::page(), cmd, loaded)?,
        cli::Commands::About(cmd) => render_static(pages::about::page(), cmd, loaded)?,
    };
    println!("{rendered}");
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                AppError::OutOfRange(_) => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
