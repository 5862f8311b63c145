//! Conversion from envelope updates to real time.
//!
//! The DS sound chip updates envelopes 192 times per second, so a phase's
//! duration is its step count divided by that rate.

use super::phase::Phase;
use super::steps::{attack_steps, linear_steps, StepCount};
use crate::tables::{attack_rate, decay_rate, sustain_level, MAX_CODE, ZERO_POINT};

/// Envelope updates per second.
pub const UPDATES_PER_SECOND: u32 = 192;

/// Initial velocity of the reference configuration (maximum hardware volume).
pub const DEFAULT_VELOCITY: i32 = 127;

/// Largest velocity the hardware accepts (7-bit).
pub const MAX_VELOCITY: i32 = 127;

/// Sustain code of the reference configuration (decay runs all the way to the floor).
pub const DEFAULT_SUSTAIN_INDEX: u8 = 0;

/// Convert a step count to seconds.
pub fn steps_to_seconds(steps: StepCount) -> f64 {
    steps as f64 / f64::from(UPDATES_PER_SECOND)
}

/// The fixed inputs every phase simulation shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeParams {
    /// Starting volume for attack, and the level release falls from.
    pub velocity: i32,
    /// Sustain code selecting the level at which decay stops.
    pub sustain_index: u8,
}

impl EnvelopeParams {
    pub fn new(velocity: i32, sustain_index: u8) -> Self {
        assert!(
            (0..=MAX_VELOCITY).contains(&velocity),
            "velocity {velocity} out of range 0..={MAX_VELOCITY}"
        );
        assert!(
            sustain_index <= MAX_CODE,
            "sustain index {sustain_index} out of range 0..={MAX_CODE}"
        );
        Self {
            velocity,
            sustain_index,
        }
    }

    /// Internal volume at which decay stops.
    pub fn sustain_threshold(&self) -> i32 {
        sustain_level(self.sustain_index)
    }
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            sustain_index: DEFAULT_SUSTAIN_INDEX,
        }
    }
}

/// Simulate one phase for a hardware code and return its length in updates.
///
/// - Attack: multiply `velocity` by the attack rate until it reaches zero.
/// - Decay: subtract the decay rate from 0 until the sustain threshold is crossed.
/// - Release: subtract the release rate from `velocity` until the floor is crossed.
pub fn phase_steps(phase: Phase, code: u8, params: &EnvelopeParams) -> StepCount {
    match phase {
        Phase::Attack => attack_steps(attack_rate(code), params.velocity),
        Phase::Decay => linear_steps(decay_rate(code), 0, params.sustain_threshold()),
        Phase::Release => linear_steps(decay_rate(code), params.velocity, ZERO_POINT),
    }
}

/// Duration of one phase for a hardware code, in seconds.
pub fn phase_seconds(phase: Phase, code: u8, params: &EnvelopeParams) -> f64 {
    steps_to_seconds(phase_steps(phase, code, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn seconds_are_steps_over_192() {
        assert_eq!(steps_to_seconds(0), 0.0);
        assert_eq!(steps_to_seconds(192), 1.0);
        assert_eq!(steps_to_seconds(96), 0.5);
    }

    #[test]
    fn slowest_decay_is_482_seconds() {
        let params = EnvelopeParams::default();
        assert_eq!(phase_steps(Phase::Decay, 0, &params), 92544);
        assert_eq!(phase_seconds(Phase::Decay, 0, &params), 482.0);
    }

    #[test]
    fn slowest_release_from_full_velocity() {
        let params = EnvelopeParams::default();
        assert_eq!(phase_steps(Phase::Release, 0, &params), 92671);
        assert_approx_eq!(phase_seconds(Phase::Release, 0, &params), 482.661_458_333_333_3);
    }

    #[test]
    fn fastest_attack_is_one_update() {
        let params = EnvelopeParams::default();
        assert_eq!(phase_steps(Phase::Attack, 127, &params), 1);
        assert_approx_eq!(phase_seconds(Phase::Attack, 127, &params), 1.0 / 192.0);
    }

    #[test]
    fn higher_sustain_shortens_decay() {
        let floor = EnvelopeParams::default();
        let half = EnvelopeParams::new(DEFAULT_VELOCITY, 64);
        let full = EnvelopeParams::new(DEFAULT_VELOCITY, 127);
        let at_floor = phase_steps(Phase::Decay, 10, &floor);
        let at_half = phase_steps(Phase::Decay, 10, &half);
        assert!(at_half < at_floor);
        // Sustain level 0 means decay is already done.
        assert_eq!(phase_steps(Phase::Decay, 10, &full), 0);
    }

    #[test]
    fn sustain_threshold_reads_table() {
        let params = EnvelopeParams::new(DEFAULT_VELOCITY, 3);
        assert_eq!(params.sustain_threshold(), -83328);
    }

    #[test]
    #[should_panic(expected = "sustain index")]
    fn sustain_index_out_of_range_panics() {
        EnvelopeParams::new(DEFAULT_VELOCITY, 128);
    }

    #[test]
    #[should_panic(expected = "velocity")]
    fn velocity_above_hardware_range_panics() {
        EnvelopeParams::new(i32::MAX, 0);
    }
}
