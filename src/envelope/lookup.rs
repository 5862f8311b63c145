//! Reverse lookup: from a desired time (or attenuation) back to a hardware code.
//!
//! Used when porting envelopes authored in seconds and decibels (SoundFont
//! style) back to sequence data. Codes are scanned from slowest to fastest
//! and the first one that beats the target wins; 127 is the fallback.

use super::phase::Phase;
use super::sustain::sustain_gain_db;
use super::timing::{phase_seconds, EnvelopeParams};
use crate::tables::{sustain_level, MAX_CODE};

/// Slowest code whose phase time is strictly shorter than `seconds`.
///
/// Code 0 is not considered.
pub fn code_for_seconds(phase: Phase, seconds: f64, params: &EnvelopeParams) -> u8 {
    (1..MAX_CODE)
        .find(|&code| phase_seconds(phase, code, params) < seconds)
        .unwrap_or(MAX_CODE)
}

/// Lowest sustain code whose attenuation is strictly less than `attenuation_db`.
pub fn sustain_code_for_db(attenuation_db: f64) -> u8 {
    (0..MAX_CODE)
        .find(|&code| -attenuation_db < sustain_gain_db(sustain_level(MAX_CODE - code)))
        .unwrap_or(MAX_CODE)
}
