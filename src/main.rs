use anyhow::Result;
use clap::Parser;
use qars::cli::{BatchArgs, Cli, Commands, ScoreArgs};
use qars::commands::{BatchConfig, ConfigSource, ScoreConfig};
use qars::scoring::ScoreInput;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    qars::observability::init_tracing(cli.verbosity);

    match cli.command {
        Commands::Score(args) => qars::commands::handle_score(build_score_config(args)?),
        Commands::Batch(args) => qars::commands::handle_batch(build_batch_config(args)?),
        Commands::Init { force } => qars::commands::init_config(force),
    }
}

// Pure function to build score configuration
fn build_score_config(args: ScoreArgs) -> Result<ScoreConfig> {
    Ok(ScoreConfig {
        input: ScoreInput::new(args.x, args.y, args.z, args.sensitivity, args.v == 1, args.q),
        source: ConfigSource::from_args(args.config)?,
        format: args.format,
        output: args.output,
    })
}

// Pure function to build batch configuration
fn build_batch_config(args: BatchArgs) -> Result<BatchConfig> {
    Ok(BatchConfig {
        input: args.input,
        output: args.output,
        default_z: args.default_z,
        source: ConfigSource::from_args(args.config)?,
        jobs: args.jobs,
    })
}
