//! Step-by-step simulation of the envelope's volume arithmetic.
//!
//! Each function walks a synthetic volume from its start condition to the
//! phase's stop condition and returns how many hardware updates that took.
//! Intermediate math is done in `i64` so large configured velocities cannot
//! overflow the multiply.

/// Number of envelope updates a phase lasted.
pub type StepCount = u64;

/// Count attack updates `v ← a·v / 256` needed to bring `velocity` to zero or below.
///
/// A multiplier of 0 ends the attack on the first update. A non-positive
/// starting velocity takes zero steps.
///
/// # Panics
/// If `multiplier` is outside `0..=255`; a multiplier of 256 or more would
/// never reach zero.
pub fn attack_steps(multiplier: i32, velocity: i32) -> StepCount {
    assert!(
        (0..256).contains(&multiplier),
        "attack multiplier {multiplier} must be in 0..=255"
    );

    let multiplier = i64::from(multiplier);
    let mut volume = i64::from(velocity);
    let mut steps = 0;
    while volume > 0 {
        steps += 1;
        volume = multiplier * volume / 256;
    }
    steps
}

/// Count linear updates `v ← v − d` needed to take `start` to `threshold` or below.
///
/// Shared by decay (start 0, threshold = sustain level) and release
/// (start = velocity, threshold = envelope floor). Zero if `start <= threshold`.
///
/// # Panics
/// If `subtrahend` is not strictly positive.
pub fn linear_steps(subtrahend: i32, start: i32, threshold: i32) -> StepCount {
    assert!(
        subtrahend > 0,
        "decay/release subtrahend {subtrahend} must be positive"
    );

    let subtrahend = i64::from(subtrahend);
    let threshold = i64::from(threshold);
    let mut volume = i64::from(start);
    let mut steps = 0;
    while volume > threshold {
        steps += 1;
        volume -= subtrahend;
    }
    steps
}
