use std::path::PathBuf;

use anyhow::Result;

use super::ConfigSource;
use crate::batch::{score_csv_file, BatchOptions};

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub default_z: f64,
    pub source: ConfigSource,
    pub jobs: usize,
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    let (_, qars_config) = config.source.resolve()?;

    let parallel = config.jobs != 1;
    if parallel {
        configure_thread_pool(config.jobs);
    }

    let options = BatchOptions {
        default_z: config.default_z,
        parallel,
    };
    score_csv_file(&qars_config, &config.input, &config.output, &options)?;
    Ok(())
}

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just ignore
        tracing::debug!("Thread pool already configured: {}", e);
    }
}
