use std::io::Write;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use super::{Assessment, AssessmentWriter};
use crate::scoring::{RiskBand, ScoreResult};

/// Human-readable score card with a recommended action
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, assessment: &Assessment<'_>) -> anyhow::Result<()> {
        let result = assessment.result;
        writeln!(self.writer, "{}", "Quantum-Adjusted Risk Score".bold())?;
        writeln!(
            self.writer,
            "  Preset: {}  Sensitivity: {}  Visibility: {}",
            assessment.input.preset,
            assessment.input.input.sensitivity,
            u8::from(assessment.input.input.v)
        )?;
        writeln!(
            self.writer,
            "  QARS score: {}",
            colorize(result.band, &format!("{:.3}", result.score))
        )?;
        writeln!(
            self.writer,
            "  Band: {}",
            colorize(result.band, result.band.as_str()).bold()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, result: &ScoreResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", breakdown_table(result))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendation(&mut self, band: RiskBand) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Recommended action: {}",
            colorize(band, band.recommended_action()).bold()
        )?;
        writeln!(self.writer, "  {}", band.guidance())?;
        Ok(())
    }
}

impl<W: Write> AssessmentWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment<'_>) -> anyhow::Result<()> {
        self.write_header(assessment)?;
        self.write_breakdown(assessment.result)?;
        self.write_recommendation(assessment.result.band)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn breakdown_table(result: &ScoreResult) -> Table {
    let breakdown = &result.breakdown;
    let rows = [
        ("Timeline T", breakdown.t, breakdown.w_t),
        ("Sensitivity S", breakdown.s, breakdown.w_s),
        ("Exposure E", breakdown.e, breakdown.w_e),
    ];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Component", "Value", "Weight"]);
    for (name, value, weight) in rows {
        table.add_row(vec![
            name.to_string(),
            format!("{value:.3}"),
            format!("{weight:.3}"),
        ]);
    }
    table
}

fn colorize(band: RiskBand, text: &str) -> ColoredString {
    match band {
        RiskBand::Critical => text.red(),
        RiskBand::High => text.yellow(),
        RiskBand::Medium => text.cyan(),
        RiskBand::Low => text.green(),
    }
}
