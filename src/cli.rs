use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::SectorPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Equal weights, alpha 8
    Default,
    /// Timeline and sensitivity weighted, alpha 10
    Finance,
    /// Timeline weighted, alpha 6
    Iot,
    /// Exposure weighted, alpha 8
    Cloud,
}

impl From<Preset> for SectorPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Default => SectorPreset::Default,
            Preset::Finance => SectorPreset::Finance,
            Preset::Iot => SectorPreset::Iot,
            Preset::Cloud => SectorPreset::Cloud,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "qars")]
#[command(about = "Quantum-Adjusted Risk Score for post-quantum migration planning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single asset
    Score(ScoreArgs),

    /// Score every row of a CSV asset inventory
    Batch(BatchArgs),

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Options shared by commands that build a scoring configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Sector preset
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Configuration file (defaults to the nearest .qars.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Timeline steepness for logistic scaling
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Use linear timeline scaling (T = min(1, r))
    #[arg(long)]
    pub linear: bool,

    /// Weights as wT,wS,wE (renormalized to sum to 1)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub weights: Option<Vec<f64>>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Confidentiality duration (years)
    #[arg(long = "x", visible_alias = "X", allow_negative_numbers = true)]
    pub x: f64,

    /// Time to migrate (years)
    #[arg(long = "y", visible_alias = "Y", allow_negative_numbers = true)]
    pub y: f64,

    /// Projected CRQC horizon (years)
    #[arg(long = "z", visible_alias = "Z", allow_negative_numbers = true)]
    pub z: f64,

    /// Data sensitivity
    #[arg(long, default_value = "Moderate", value_parser = ["Low", "Moderate", "High", "Critical"])]
    pub sensitivity: String,

    /// Uses breakable public-key crypto (1) or PQC / non-public-key (0)
    #[arg(long = "v", visible_alias = "visibility", default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub v: u8,

    /// Harvestability [0..1]
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub q: f64,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Input CSV file
    pub input: PathBuf,

    /// Output CSV file
    pub output: PathBuf,

    /// CRQC horizon (years) for rows without a Z column
    #[arg(long, default_value_t = crate::batch::DEFAULT_HORIZON_YEARS)]
    pub default_z: f64,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Number of parallel jobs (0 = use all cores, 1 = sequential)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Terminal,
}
