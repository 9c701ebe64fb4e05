//! Rendering of a single asset assessment.
//!
//! An [`Assessment`] pairs the scored inputs with the result. It serializes as
//! `{"input": {...}, "result": {...}}` for the structured formats, and renders
//! as a score card with a recommended action for the terminal.

pub mod terminal;

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::SectorPreset;
use crate::scoring::{ScoreInput, ScoreResult};

pub use terminal::TerminalWriter;

/// Inputs as echoed in reports, including the preset that was applied
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentInput<'a> {
    #[serde(flatten)]
    pub input: &'a ScoreInput,
    pub preset: SectorPreset,
}

/// One scored asset, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct Assessment<'a> {
    pub input: AssessmentInput<'a>,
    pub result: &'a ScoreResult,
}

impl<'a> Assessment<'a> {
    pub fn new(input: &'a ScoreInput, preset: SectorPreset, result: &'a ScoreResult) -> Self {
        Self {
            input: AssessmentInput { input, preset },
            result,
        }
    }
}

pub trait AssessmentWriter {
    fn write_assessment(&mut self, assessment: &Assessment<'_>) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> AssessmentWriter for JsonWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment<'_>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(assessment)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> AssessmentWriter for YamlWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment<'_>) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(assessment)?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn AssessmentWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
