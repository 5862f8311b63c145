//! Envelope timing model for the DS sound chip.
//!
//! Simulates the chip's per-update volume arithmetic for each timed phase
//! and converts the resulting step counts to seconds. Every function is
//! pure: the only inputs are a hardware code and [`EnvelopeParams`].

pub mod lookup;
pub mod phase;
pub mod steps;
pub mod sustain;
pub mod timing;

pub use lookup::{code_for_seconds, sustain_code_for_db};
pub use phase::Phase;
pub use steps::{attack_steps, linear_steps, StepCount};
pub use sustain::sustain_attenuation_db;
pub use timing::{
    phase_seconds, phase_steps, steps_to_seconds, EnvelopeParams, DEFAULT_SUSTAIN_INDEX,
    DEFAULT_VELOCITY, MAX_VELOCITY, UPDATES_PER_SECOND,
};
