//! Resonance detection for the forced regime.

use crate::error::{PendulumError, PendulumResult};

/// Fixed relative tolerance for resonance: within 10 % of ω₀.
pub const RESONANCE_TOLERANCE: f64 = 0.10;

/// Whether the driving frequency is resonant with the natural frequency:
/// |ω_f − ω₀| / ω₀ < 0.10.
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] when ω₀ is not strictly
/// positive (the relative difference would be undefined).
pub fn is_resonant(omega0: f64, omega_f: f64) -> PendulumResult<bool> {
    if omega0 <= 0.0 {
        return Err(PendulumError::invalid_parameter(format!(
            "resonance check requires omega0 > 0, got {omega0}"
        )));
    }
    Ok((omega_f - omega0).abs() / omega0 < RESONANCE_TOLERANCE)
}
