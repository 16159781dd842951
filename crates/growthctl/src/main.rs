//! growthctl - Growth analytics CLI
//!
//! Runs the growth analytics library against exported history files and
//! ad-hoc values.

use anyhow::Result;
use clap::{Parser, Subcommand};
use growth_analytics::{GrowthMetric, PredictionMethod, Timeframe};
use growthctl::commands;
use growthctl::commands::report::ReportArgs;
use growthctl::display::Palette;
use growthctl::GrowthConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "growthctl")]
#[command(about = "Growth analytics - trends, forecasts and scores", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use this config file instead of the user/system config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analytics report for an exported history
    Report {
        /// History export (JSON)
        #[arg(long)]
        history: PathBuf,

        /// Metric for trend analysis
        #[arg(long)]
        metric: Option<GrowthMetric>,

        /// Lookback window: week, month, quarter
        #[arg(long)]
        timeframe: Option<Timeframe>,

        /// Prediction method: linear, exponential, polynomial
        #[arg(long)]
        method: Option<PredictionMethod>,

        /// Reference time in epoch milliseconds (default: now)
        #[arg(long)]
        now: Option<i64>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Momentum of a series of values
    Momentum {
        #[arg(allow_negative_numbers = true, value_delimiter = ',')]
        values: Vec<f64>,
    },

    /// Predict the next value of a series
    Predict {
        #[arg(allow_negative_numbers = true, value_delimiter = ',')]
        values: Vec<f64>,

        /// Prediction method: linear, exponential, polynomial
        #[arg(long)]
        method: Option<PredictionMethod>,
    },

    /// Correlation matrix across all growth metrics
    Correlate {
        /// History export (JSON)
        #[arg(long)]
        history: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Wisdom score from four 0-100 components
    Wisdom {
        experience: f64,
        reflection: f64,
        application: f64,
        teaching: f64,
    },

    /// Insight potential from four 0-100 traits
    Insight {
        curiosity: f64,
        knowledge: f64,
        creativity: f64,
        intuition: f64,
    },

    /// Fibonacci number (or sequence)
    Fib {
        n: u32,

        /// Print the first N numbers instead of the Nth
        #[arg(long)]
        sequence: bool,
    },

    /// Golden-angle spiral points
    Spiral {
        steps: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show or change configuration
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("GROWTH_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GrowthConfig::load_from(path)?,
        None => GrowthConfig::load()?,
    };
    debug!(?config, "Effective configuration");
    let palette = Palette::new(config.output.color);

    match cli.command {
        Commands::Report { history, metric, timeframe, method, now, json } => commands::report::run(
            ReportArgs {
                history: &history,
                metric,
                timeframe,
                method,
                now_ms: now.unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
                json,
            },
            &config,
            &palette,
        ),
        Commands::Momentum { values } => commands::series::momentum(&values, &palette),
        Commands::Predict { values, method } => {
            commands::series::predict(&values, method.unwrap_or(config.analysis.prediction_method))
        }
        Commands::Correlate { history, json } => {
            commands::correlate::run(&history, json, &config, &palette)
        }
        Commands::Wisdom { experience, reflection, application, teaching } => {
            commands::scores::wisdom(experience, reflection, application, teaching)
        }
        Commands::Insight { curiosity, knowledge, creativity, intuition } => {
            commands::scores::insight(curiosity, knowledge, creativity, intuition)
        }
        Commands::Fib { n, sequence } => commands::golden::fib(n, sequence),
        Commands::Spiral { steps, json } => commands::golden::spiral(steps, json),
        Commands::Config { set } => commands::config::run(set, &config, cli.config.as_deref()),
    }
}
