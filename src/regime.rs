//! Damping regime classification.
//!
//! Comparing the damping rate γ against the natural frequency ω₀ yields a
//! total, non-overlapping partition: exactly one of underdamped,
//! overdamped, or critically damped holds for every (γ, ω₀) pair. The
//! undamped variant is reserved for runs with no damping term at all.

use serde::{Deserialize, Serialize};

/// Motion regime of the pendulum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionRegime {
    /// No damping term: pure sinusoidal oscillation.
    Undamped,
    /// γ < ω₀: decaying oscillation at the damped frequency ω_d.
    Underdamped,
    /// γ > ω₀: two-exponential decay, no oscillation.
    Overdamped,
    /// γ = ω₀ exactly: fastest non-oscillatory return to rest.
    CriticallyDamped,
}

impl MotionRegime {
    /// Classify a damped run from its damping rate and natural frequency.
    ///
    /// Critical damping uses exact floating-point equality. The boundary
    /// is therefore razor-thin: callers that want a tolerance band must
    /// quantize γ themselves before classifying.
    #[must_use]
    pub fn classify(gamma: f64, omega0: f64) -> Self {
        if gamma < omega0 {
            Self::Underdamped
        } else if gamma > omega0 {
            Self::Overdamped
        } else {
            Self::CriticallyDamped
        }
    }

    /// Whether the trajectory oscillates around equilibrium.
    #[must_use]
    pub const fn is_oscillatory(&self) -> bool {
        matches!(self, Self::Undamped | Self::Underdamped)
    }

    /// Human-readable regime label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Undamped => "undamped",
            Self::Underdamped => "underdamped",
            Self::Overdamped => "overdamped",
            Self::CriticallyDamped => "critically damped",
        }
    }
}

impl std::fmt::Display for MotionRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
