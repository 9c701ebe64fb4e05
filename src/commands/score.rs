use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use super::ConfigSource;
use crate::cli::OutputFormat;
use crate::output::{create_writer, Assessment};
use crate::scoring::{score_input, ScoreInput};

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub input: ScoreInput,
    pub source: ConfigSource,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let (preset, qars_config) = config.source.resolve()?;
    let result = score_input(&qars_config, &config.input)?;
    info!(
        score = result.score,
        band = %result.band,
        "Scored asset"
    );

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => {
            // Color detection looks at stdout, not the file
            colored::control::set_override(false);
            Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?,
            )
        }
        None => Box::new(io::stdout()),
    };

    let assessment = Assessment::new(&config.input, preset, &result);
    create_writer(config.format, destination).write_assessment(&assessment)
}
