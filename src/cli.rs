use clap::{Args, Parser, Subcommand, ValueEnum};
use phonescore::pages::Section;
use phonescore::types::record::{Gender, RecordInput};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "phonescore",
    version,
    about = "Teen phone addiction dashboard and heuristic risk scorer"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of the discovered layers
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dataset summary and project highlights
    Overview(PageCommand),
    /// Key findings and model performance
    Analysis(PageCommand),
    /// Score a respondent's answers
    Predict(PredictCommand),
    /// Research purpose and methodology
    About(PageCommand),
}

impl Commands {
    pub fn section(&self) -> Section {
        match self {
            Commands::Overview(_) => Section::Overview,
            Commands::Analysis(_) => Section::Analysis,
            Commands::Predict(_) => Section::Predictor,
            Commands::About(_) => Section::About,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

#[derive(Args)]
pub struct PageCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct PredictCommand {
    /// Read answers from a JSON or TOML file; flags override its values
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Age in years (10-20)
    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<i32>,

    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Daily phone usage in hours (0-12)
    #[arg(long, allow_hyphen_values = true)]
    pub daily_usage: Option<f64>,

    /// Sleep in hours (0-12)
    #[arg(long, allow_hyphen_values = true)]
    pub sleep_hours: Option<f64>,

    /// Academic performance (0-100)
    #[arg(long, allow_hyphen_values = true)]
    pub academic_performance: Option<i32>,

    /// Social interactions (0-10)
    #[arg(long, allow_hyphen_values = true)]
    pub social_interactions: Option<i32>,

    /// Anxiety level (0-10)
    #[arg(long, allow_hyphen_values = true)]
    pub anxiety_level: Option<i32>,

    /// Phone checks per day (0-200)
    #[arg(long, allow_hyphen_values = true)]
    pub phone_checks: Option<i32>,

    /// Include the per-attribute contribution breakdown
    #[arg(long)]
    pub explain: bool,

    /// Reject out-of-range answers instead of clamping them
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl PredictCommand {
    pub fn record_input(&self) -> RecordInput {
        RecordInput {
            age: self.age,
            gender: self.gender.map(Gender::from),
            daily_usage_hours: self.daily_usage,
            sleep_hours: self.sleep_hours,
            academic_performance: self.academic_performance,
            social_interactions: self.social_interactions,
            anxiety_level: self.anxiety_level,
            phone_checks_per_day: self.phone_checks,
        }
    }
}
