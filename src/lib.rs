//! nds-adsr — ADSR envelope timing tables for the Nintendo DS sound chip.
//!
//! Converts hardware attack, decay, sustain and release codes into real
//! time (or attenuation) by simulating the chip's envelope arithmetic, and
//! back again.

pub mod config;
pub mod envelope;
pub mod error;
pub mod report;
pub mod tables;

pub use config::{load_config, ReportConfig};
pub use envelope::{EnvelopeParams, Phase};
pub use error::AdsrError;
pub use report::{OutputFormat, Report};
