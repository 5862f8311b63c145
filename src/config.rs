//! Report configuration — optional ~/.nds-adsr/config.yaml.
//!
//! Every field has a default, so an empty or partial file is valid. The
//! defaults reproduce the reference report: velocity 127, sustain code 0,
//! plain output.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::envelope::{EnvelopeParams, DEFAULT_SUSTAIN_INDEX, DEFAULT_VELOCITY, MAX_VELOCITY};
use crate::error::AdsrError;
use crate::report::OutputFormat;
use crate::tables::MAX_CODE;

/// Settings that shape a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Starting velocity for attack and release (0–127).
    pub velocity: i32,
    /// Sustain code where decay stops (0 = floor).
    pub sustain_index: u8,
    /// Output layout.
    pub format: OutputFormat,
}

impl ReportConfig {
    /// Reject values the envelope model cannot simulate.
    pub fn validate(&self) -> Result<(), AdsrError> {
        if self.sustain_index > MAX_CODE {
            return Err(AdsrError::invalid(
                "sustain_index",
                format!("{} is above {MAX_CODE}", self.sustain_index),
            ));
        }
        if self.velocity < 0 {
            return Err(AdsrError::invalid(
                "velocity",
                format!("{} is negative", self.velocity),
            ));
        }
        if self.velocity > MAX_VELOCITY {
            return Err(AdsrError::invalid(
                "velocity",
                format!("{} is above {MAX_VELOCITY}", self.velocity),
            ));
        }
        Ok(())
    }

    /// Simulation parameters for this config. Call [`validate`](Self::validate) first.
    pub fn params(&self) -> EnvelopeParams {
        EnvelopeParams::new(self.velocity, self.sustain_index)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            sustain_index: DEFAULT_SUSTAIN_INDEX,
            format: OutputFormat::Plain,
        }
    }
}

/// Default config location.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".nds-adsr");
    path.push("config.yaml");
    path
}

/// Load and validate a config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ReportConfig, AdsrError> {
    if !path.exists() {
        return Ok(ReportConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: ReportConfig = if content.trim().is_empty() {
        ReportConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };
    config.validate()?;
    info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
