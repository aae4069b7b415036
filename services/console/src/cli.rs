use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use wardrobe_ai::config::AppConfig;
use wardrobe_ai::error::AppError;
use wardrobe_ai::intelligence::Season;
use wardrobe_ai::telemetry;

use crate::demo::{run_analyze, run_demo, run_weather};
use crate::infra;

#[derive(Parser, Debug)]
#[command(
    name = "Smart Wardrobe Stylist",
    about = "Assess outfit combinations and generate wardrobe recommendations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess a single outfit combination
    Analyze(AnalyzeArgs),
    /// Show offline weather conditions and styling advice for a city
    Weather(WeatherArgs),
    /// Run an end-to-end demo covering accounts, wardrobe, and recommendations (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Top descriptor, e.g. "yellow polo"
    #[arg(long)]
    pub(crate) top: String,
    /// Bottom descriptor, e.g. "navy slim jeans"
    #[arg(long)]
    pub(crate) bottom: String,
    /// Footwear descriptor, e.g. "black leather sneakers"
    #[arg(long)]
    pub(crate) footwear: String,
    /// Occasion to dress for, e.g. work, hangout, ethnic
    #[arg(long)]
    pub(crate) occasion: Option<String>,
    /// Force a season instead of deriving one (summer, winter, all-season)
    #[arg(long, value_parser = infra::parse_season)]
    pub(crate) season: Option<Season>,
    /// Temperature in degrees Celsius used to derive the season
    #[arg(long)]
    pub(crate) temperature: Option<f32>,
}

#[derive(Args, Debug)]
pub(crate) struct WeatherArgs {
    /// City to look up in the offline weather table
    #[arg(long)]
    pub(crate) city: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Persist accounts and wardrobe under the configured data directory
    #[arg(long)]
    pub(crate) persist: bool,
    /// Optional closet CSV export to hydrate the demo wardrobe
    #[arg(long)]
    pub(crate) closet_csv: Option<PathBuf>,
    /// City used for the weather-aware recommendation round
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Occasion to dress for
    #[arg(long)]
    pub(crate) occasion: Option<String>,
    /// Number of ranked outfits to display
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "smart wardrobe console ready");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Weather(args) => run_weather(args),
        Command::Demo(args) => run_demo(args, &config),
    }
}
