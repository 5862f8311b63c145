//! Timing report — every hardware code of every timed phase, in a fixed order.
//!
//! The report runs attack, then decay, then release, each over codes
//! 0..=127, giving 384 entries. In [`OutputFormat::Plain`] the output is one
//! number of seconds per line with no labels, so line position alone
//! identifies phase and code: line 129 is decay code 0 and line 257 is
//! release code 0.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::envelope::{phase_steps, steps_to_seconds, EnvelopeParams, Phase, StepCount};
use crate::tables::{codes, TABLE_LEN};

/// Number of entries in a full report.
pub const REPORT_LEN: usize = TABLE_LEN * Phase::ALL.len();

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value in seconds per line, no header.
    #[default]
    Plain,
    /// `phase,code,steps,seconds` with a header row.
    Csv,
}

/// Timing of one phase at one hardware code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportEntry {
    pub phase: Phase,
    pub code: u8,
    pub steps: StepCount,
    pub seconds: f64,
}

/// A complete timing report for one set of [`EnvelopeParams`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    params: EnvelopeParams,
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Simulate every phase for every code.
    pub fn generate(params: EnvelopeParams) -> Self {
        let mut entries = Vec::with_capacity(REPORT_LEN);
        for phase in Phase::ALL {
            let start = entries.len();
            for code in codes() {
                let steps = phase_steps(phase, code, &params);
                entries.push(ReportEntry {
                    phase,
                    code,
                    steps,
                    seconds: steps_to_seconds(steps),
                });
            }
            let total: StepCount = entries[start..].iter().map(|e| e.steps).sum();
            debug!(%phase, total_steps = total, "phase simulated");
        }
        Self { params, entries }
    }

    /// The parameters this report was generated with.
    pub fn params(&self) -> EnvelopeParams {
        self.params
    }

    /// All entries in output order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entries for one phase, in code order.
    pub fn phase(&self, phase: Phase) -> &[ReportEntry] {
        let index = phase.index();
        &self.entries[index * TABLE_LEN..(index + 1) * TABLE_LEN]
    }

    /// Seconds for every entry, in output order.
    pub fn seconds(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.seconds)
    }

    /// Write the report in the given format.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        if format == OutputFormat::Csv {
            writeln!(out, "phase,code,steps,seconds")?;
        }
        for entry in &self.entries {
            let seconds = format_seconds(entry.seconds);
            match format {
                OutputFormat::Plain => writeln!(out, "{seconds}")?,
                OutputFormat::Csv => writeln!(
                    out,
                    "{},{},{},{seconds}",
                    entry.phase, entry.code, entry.steps
                )?,
            }
        }
        out.flush()
    }

    /// Render the report to a string.
    pub fn render(&self, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf, format);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Shortest decimal that round-trips to `seconds`, always with a fractional part.
///
/// `482.0` stays `482.0` rather than `482`.
pub fn format_seconds(seconds: f64) -> String {
    let mut s = seconds.to_string();
    if seconds.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}
