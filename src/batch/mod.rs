//! CSV batch scoring.
//!
//! Each input record is mapped to a [`ScoreInput`] through the header
//! heuristics in [`heuristics`], scored once, and written back out with the
//! score columns appended. Output rows keep the input order even when rows are
//! scored in parallel.

pub mod heuristics;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::QarsConfig;
use crate::errors::ScoringError;
use crate::scoring::{score_input, ScoreInput, ScoreResult};

/// Columns appended to every output row
pub const OUTPUT_COLUMNS: [&str; 5] = ["T", "S", "E", "QARS", "band"];

/// Horizon used when a record has no `Z` column
pub const DEFAULT_HORIZON_YEARS: f64 = 12.0;

/// Input column names, matched case-insensitively after trimming
pub mod columns {
    pub const SHELF_LIFE: &str = "data shelf life";
    pub const MIGRATION: &str = "migration";
    pub const VENDOR_SUPPLY: &str = "vendor supply time";
    pub const ARCHITECTURE: &str = "architecture flexibility";
    pub const HORIZON: &str = "z";
    pub const ALGORITHM: &str = "algorithm";
    pub const FREQUENCY: &str = "frequency";
    pub const THIRD_PARTY_USAGE: &str = "3rd party usage";
    pub const THIRD_PARTY_SAFE: &str = "is third party quantum safe";
    pub const TRANSITION: &str = "transition algorithm";
    pub const SENSITIVITY: &str = "data sensitivity";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchOptions {
    pub default_z: f64,
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            default_z: DEFAULT_HORIZON_YEARS,
            parallel: true,
        }
    }
}

/// Case-insensitive view of one CSV record.
pub struct AssetRecord<'a> {
    headers: &'a [String],
    record: &'a StringRecord,
}

impl<'a> AssetRecord<'a> {
    /// `headers` must already be normalized with [`normalize_header`].
    pub fn new(headers: &'a [String], record: &'a StringRecord) -> Self {
        Self { headers, record }
    }

    /// Trimmed, non-empty value of a column.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|h| h == column)?;
        self.record
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn number(&self, column: &str, default: f64) -> f64 {
        self.get(column)
            .and_then(heuristics::parse_number)
            .unwrap_or(default)
    }

    /// Derive scoring inputs from the record's free-text fields.
    ///
    /// Negative migration or vendor supply cells are rejected; only the
    /// architecture adjustment is floored so it cannot push Y below zero.
    pub fn to_input(&self, default_z: f64) -> crate::errors::Result<ScoreInput> {
        use self::heuristics::*;

        let x = self.number(columns::SHELF_LIFE, 0.0);
        let planned = non_negative_cell(columns::MIGRATION, self.number(columns::MIGRATION, 0.0))?;
        let vendor = non_negative_cell(
            columns::VENDOR_SUPPLY,
            self.number(columns::VENDOR_SUPPLY, 0.0),
        )?;
        let adjustment = self
            .get(columns::ARCHITECTURE)
            .map(architecture_adjustment)
            .unwrap_or(0.0);
        let y = (planned + vendor + adjustment).max(0.0);
        let z = self.number(columns::HORIZON, default_z);

        let v = self
            .get(columns::ALGORITHM)
            .map(algorithm_visibility)
            .unwrap_or(false);
        let q = harvestability_from_frequency(
            self.get(columns::FREQUENCY)
                .map(parse_frequency)
                .unwrap_or(0.0),
        );

        let third_party_unsafe = self
            .get(columns::THIRD_PARTY_USAGE)
            .is_some_and(is_affirmative)
            && self
                .get(columns::THIRD_PARTY_SAFE)
                .is_some_and(is_negative);
        let transition = self
            .get(columns::TRANSITION)
            .is_some_and(is_quantum_safe_transition);
        let (v, q) = adjust_exposure(v, q, third_party_unsafe, transition);

        let sensitivity = normalize_sensitivity(self.get(columns::SENSITIVITY));

        Ok(ScoreInput::new(x, y, z, sensitivity.as_str(), v, q))
    }
}

fn non_negative_cell(column: &'static str, value: f64) -> crate::errors::Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ScoringError::InvalidInput {
            field: column,
            value,
        })
    }
}

/// Pad a short record with empty fields so appended scores line up with the
/// header. Records wider than the header are rejected.
fn align_record(record: &StringRecord, width: usize, row: usize) -> Result<StringRecord> {
    if record.len() > width {
        anyhow::bail!(
            "Row {} has {} fields but the header has {}",
            row,
            record.len(),
            width
        );
    }
    let mut aligned = record.clone();
    while aligned.len() < width {
        aligned.push_field("");
    }
    Ok(aligned)
}

pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Score already-parsed records, preserving their order.
///
/// The first failing row aborts the batch; its 1-based row number is in the
/// error context.
pub fn score_records(
    config: &QarsConfig,
    headers: &StringRecord,
    records: &[StringRecord],
    options: &BatchOptions,
) -> Result<Vec<ScoreResult>> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    let score_row = |(index, record): (usize, &StringRecord)| -> Result<ScoreResult> {
        AssetRecord::new(&normalized, record)
            .to_input(options.default_z)
            .and_then(|input| score_input(config, &input))
            .with_context(|| format!("Failed to score row {}", index + 1))
    };

    if options.parallel {
        records.par_iter().enumerate().map(score_row).collect()
    } else {
        records.iter().enumerate().map(score_row).collect()
    }
}

fn output_fields(result: &ScoreResult) -> [String; 5] {
    [
        format!("{:.3}", result.t),
        format!("{:.3}", result.s),
        format!("{:.3}", result.e),
        format!("{:.3}", result.score),
        result.band.to_string(),
    ]
}

/// Read CSV from `reader`, write the scored superset CSV to `writer`.
///
/// Returns the number of rows scored.
pub fn score_csv<R: Read, W: Write>(
    config: &QarsConfig,
    reader: R,
    writer: W,
    options: &BatchOptions,
) -> Result<usize> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("Failed to read CSV header")?
        .clone();
    let records = csv_reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to read CSV records")?
        .iter()
        .enumerate()
        .map(|(index, record)| align_record(record, headers.len(), index + 1))
        .collect::<Result<Vec<_>>>()?;
    debug!("Read {} records with {} columns", records.len(), headers.len());

    let results = score_records(config, &headers, &records, options)?;

    let mut csv_writer = WriterBuilder::new().flexible(true).from_writer(writer);
    let mut header_row = headers.clone();
    OUTPUT_COLUMNS.iter().for_each(|column| header_row.push_field(column));
    csv_writer
        .write_record(&header_row)
        .context("Failed to write CSV header")?;

    for (record, result) in records.iter().zip(&results) {
        let mut row = record.clone();
        output_fields(result).iter().for_each(|field| row.push_field(field));
        csv_writer
            .write_record(&row)
            .context("Failed to write CSV record")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;

    Ok(results.len())
}

/// File-based wrapper around [`score_csv`].
pub fn score_csv_file(
    config: &QarsConfig,
    input: &Path,
    output: &Path,
    options: &BatchOptions,
) -> Result<usize> {
    let reader = File::open(input)
        .with_context(|| format!("Failed to open input file {}", input.display()))?;
    let writer = File::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;

    let rows = score_csv(config, reader, writer, options)?;
    info!(
        "Scored {} rows from {} into {}",
        rows,
        input.display(),
        output.display()
    );
    Ok(rows)
}
