//! Sustain level expressed as attenuation in decibels.
//!
//! Sustain codes count up from silence (0) to full level (127), while the
//! sustain table is stored floor-first, so code `c` reads entry `127 − c`.

use crate::tables::{sustain_level, MAX_CODE, ZERO_POINT};

/// Attenuation, in positive decibels, that a sustain code applies to full level.
///
/// Code 127 is 0 dB. Code 0 is silence and returns [`f64::INFINITY`].
///
/// # Panics
/// If `code > 127`.
pub fn sustain_attenuation_db(code: u8) -> f64 {
    assert!(
        code <= MAX_CODE,
        "sustain code {code} out of range 0..={MAX_CODE}"
    );
    let level = sustain_level(MAX_CODE - code);
    if level == 0 {
        return f64::INFINITY;
    }
    sustain_gain_db(level).abs()
}

/// Signed gain in decibels of an internal sustain level relative to full volume.
///
/// Zero for the floor value, negative above it, `-inf` at 0.
pub(crate) fn sustain_gain_db(level: i32) -> f64 {
    let amplitude = f64::from(level) / f64::from(ZERO_POINT);
    20.0 * amplitude.abs().log10()
}
