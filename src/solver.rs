//! Closed-form trajectory solver.
//!
//! Turns derived quantities plus initial conditions (or forcing
//! parameters) into a [`TrajectorySolution`]: a tagged union carrying only
//! the coefficients its regime needs, evaluated analytically at any time.
//!
//! `evaluate(t)` is a pure function of t — side-effect-free and safe to
//! call at arbitrary, non-monotonic, or repeated time values. The
//! surrounding animation loop owns all scheduling.
//!
//! # Known limitation
//!
//! The amplitude/phase formulas lose precision near A ≈ 0; with
//! θ₀ = θ̇₀ = 0 the phase is NaN and the trajectory evaluates to NaN. No
//! numeric stabilization is performed.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, PendulumResult};
use crate::model::{self, DerivedQuantities};
use crate::params::{
    DampingParameters, ForcingParameters, InitialConditions, PendulumParameters,
};
use crate::regime::MotionRegime;
use crate::resonance;

/// Angle and angular velocity at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumSample {
    /// Angular displacement θ from vertical (rad).
    pub theta: f64,
    /// Angular velocity θ̇ (rad/s).
    pub theta_dot: f64,
}

/// Closed-form trajectory, polymorphic over the motion regime.
///
/// Each variant carries exactly the coefficients its `evaluate` needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrajectorySolution {
    /// θ(t) = A·cos(ω₀t + φ)
    Undamped {
        /// Natural angular frequency ω₀.
        omega0: f64,
        /// Oscillation amplitude A.
        amplitude: f64,
        /// Initial phase φ in [0, 2π).
        phase: f64,
    },
    /// θ(t) = A·e^(−γt)·cos(ω_d·t + φ)
    Underdamped {
        /// Damping rate γ.
        gamma: f64,
        /// Damped angular frequency ω_d.
        omega_d: f64,
        /// Envelope amplitude A.
        amplitude: f64,
        /// Initial phase φ in [0, 2π).
        phase: f64,
    },
    /// θ(t) = C1·e^(γ₁t) + C2·e^(γ₂t), both exponents real and negative.
    Overdamped {
        /// First mode coefficient.
        c1: f64,
        /// Second mode coefficient.
        c2: f64,
        /// Slow decay exponent γ₁ = −γ + sqrt(γ²−ω₀²).
        root1: f64,
        /// Fast decay exponent γ₂ = −γ − sqrt(γ²−ω₀²).
        root2: f64,
    },
    /// θ(t) = (C1 + C2·t)·e^(−γt)
    CriticallyDamped {
        /// Damping rate γ (= ω₀).
        gamma: f64,
        /// Constant coefficient C1 = θ₀.
        c1: f64,
        /// Linear coefficient C2 = θ̇₀ + γθ₀.
        c2: f64,
    },
    /// Steady-state forced response θ(t) = A·cos(ω_f·t − δ), transient
    /// homogeneous terms ignored.
    Forced {
        /// Driving angular frequency ω_f.
        omega_f: f64,
        /// Steady-state amplitude A.
        amplitude: f64,
        /// Phase lag δ in [0, 2π).
        phase: f64,
    },
}

impl TrajectorySolution {
    /// Evaluate θ(t) and θ̇(t).
    #[must_use]
    pub fn evaluate(&self, t: f64) -> PendulumSample {
        match *self {
            Self::Undamped {
                omega0,
                amplitude,
                phase,
            } => {
                let arg = omega0 * t + phase;
                PendulumSample {
                    theta: amplitude * arg.cos(),
                    theta_dot: -amplitude * omega0 * arg.sin(),
                }
            }
            Self::Underdamped {
                gamma,
                omega_d,
                amplitude,
                phase,
            } => {
                let envelope = amplitude * (-gamma * t).exp();
                let arg = omega_d * t + phase;
                PendulumSample {
                    theta: envelope * arg.cos(),
                    theta_dot: -envelope * (gamma * arg.cos() + omega_d * arg.sin()),
                }
            }
            Self::Overdamped { c1, c2, root1, root2 } => {
                let mode1 = (root1 * t).exp();
                let mode2 = (root2 * t).exp();
                PendulumSample {
                    theta: c1 * mode1 + c2 * mode2,
                    theta_dot: c1 * root1 * mode1 + c2 * root2 * mode2,
                }
            }
            Self::CriticallyDamped { gamma, c1, c2 } => {
                let decay = (-gamma * t).exp();
                PendulumSample {
                    theta: (c1 + c2 * t) * decay,
                    // Truncated derivative: drops the −γ·(C1 + C2·t) term of
                    // d/dt[(C1 + C2·t)·e^(−γt)]. Kept for behavioral parity.
                    theta_dot: c2 * decay * (1.0 - gamma * t),
                }
            }
            Self::Forced {
                omega_f,
                amplitude,
                phase,
            } => {
                let arg = omega_f * t - phase;
                PendulumSample {
                    theta: amplitude * arg.cos(),
                    theta_dot: -amplitude * omega_f * arg.sin(),
                }
            }
        }
    }

    /// Motion regime this trajectory was solved under.
    ///
    /// Returns `None` for the forced steady state, whose form is set by
    /// the driving frequency rather than a damping regime.
    #[must_use]
    pub const fn regime(&self) -> Option<MotionRegime> {
        match self {
            Self::Undamped { .. } => Some(MotionRegime::Undamped),
            Self::Underdamped { .. } => Some(MotionRegime::Underdamped),
            Self::Overdamped { .. } => Some(MotionRegime::Overdamped),
            Self::CriticallyDamped { .. } => Some(MotionRegime::CriticallyDamped),
            Self::Forced { .. } => None,
        }
    }
}

/// Solution report for a free (undamped) run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FreeSolution {
    /// Natural angular frequency ω₀.
    pub omega0: f64,
    /// Oscillation amplitude A.
    pub amplitude: f64,
    /// Initial phase φ in [0, 2π).
    pub phase: f64,
    /// Evaluable closed-form trajectory.
    pub trajectory: TrajectorySolution,
}

/// Solution report for a damped run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DampedSolution {
    /// Natural angular frequency ω₀.
    pub omega0: f64,
    /// Damping rate γ (zero when the coefficient is zero).
    pub gamma: f64,
    /// Moment of inertia I.
    pub inertia: f64,
    /// Classified motion regime.
    pub regime: MotionRegime,
    /// Evaluable closed-form trajectory.
    pub trajectory: TrajectorySolution,
}

impl DampedSolution {
    /// Envelope amplitude, present only for oscillatory regimes.
    #[must_use]
    pub const fn amplitude(&self) -> Option<f64> {
        match self.trajectory {
            TrajectorySolution::Undamped { amplitude, .. }
            | TrajectorySolution::Underdamped { amplitude, .. } => Some(amplitude),
            _ => None,
        }
    }

    /// Initial phase, present only for oscillatory regimes.
    #[must_use]
    pub const fn phase(&self) -> Option<f64> {
        match self.trajectory {
            TrajectorySolution::Undamped { phase, .. }
            | TrajectorySolution::Underdamped { phase, .. } => Some(phase),
            _ => None,
        }
    }
}

/// Solution report for a forced steady-state run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForcedSolution {
    /// Natural angular frequency ω₀.
    pub omega0: f64,
    /// Moment of inertia I.
    pub inertia: f64,
    /// Damping rate γ.
    pub gamma: f64,
    /// Steady-state amplitude A.
    pub amplitude: f64,
    /// Phase lag δ in [0, 2π).
    pub phase: f64,
    /// Whether ω_f is within 10 % of ω₀.
    pub resonant: bool,
    /// Evaluable closed-form trajectory.
    pub trajectory: TrajectorySolution,
}

/// Normalize a phase into [0, 2π) by adding 2π when negative.
fn normalize_phase(phi: f64) -> f64 {
    if phi < 0.0 {
        phi + TAU
    } else {
        phi
    }
}

/// Amplitude and phase of the free-oscillation form from initial
/// conditions: A = sqrt(θ₀² + (θ̇₀/ω₀)²), φ = atan2(−θ̇₀/(ω₀A), θ₀/A).
fn free_amplitude_phase(ic: &InitialConditions, omega0: f64) -> (f64, f64) {
    let amplitude = (ic.theta0.powi(2) + (ic.theta_dot0 / omega0).powi(2)).sqrt();
    let phase = normalize_phase(
        (-ic.theta_dot0 / (omega0 * amplitude)).atan2(ic.theta0 / amplitude),
    );
    (amplitude, phase)
}

fn undamped_trajectory(ic: &InitialConditions, omega0: f64) -> (f64, f64, TrajectorySolution) {
    let (amplitude, phase) = free_amplitude_phase(ic, omega0);
    (
        amplitude,
        phase,
        TrajectorySolution::Undamped {
            omega0,
            amplitude,
            phase,
        },
    )
}

/// Solve the free (undamped) pendulum.
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] on invalid parameters or
/// initial conditions.
pub fn solve_free(
    params: &PendulumParameters,
    ic: &InitialConditions,
) -> PendulumResult<FreeSolution> {
    params.validate_physical()?;
    ic.validate_physical()?;

    let derived = DerivedQuantities::free(params)?;
    let (amplitude, phase, trajectory) = undamped_trajectory(ic, derived.omega0);

    Ok(FreeSolution {
        omega0: derived.omega0,
        amplitude,
        phase,
        trajectory,
    })
}

/// Solve the damped pendulum, classifying the regime from γ vs ω₀.
///
/// A zero damping coefficient short-circuits to the undamped form: γ is
/// never compared against ω₀ and the regime reports
/// [`MotionRegime::Undamped`].
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] on invalid parameters,
/// initial conditions, or damping coefficient.
pub fn solve_damped(
    params: &PendulumParameters,
    ic: &InitialConditions,
    damping: &DampingParameters,
) -> PendulumResult<DampedSolution> {
    params.validate_physical()?;
    ic.validate_physical()?;
    damping.validate_physical()?;

    if damping.coefficient == 0.0 {
        let derived = DerivedQuantities::free(params)?;
        let (_, _, trajectory) = undamped_trajectory(ic, derived.omega0);
        return Ok(DampedSolution {
            omega0: derived.omega0,
            gamma: 0.0,
            inertia: derived.inertia,
            regime: MotionRegime::Undamped,
            trajectory,
        });
    }

    let derived = DerivedQuantities::damped(params, damping.coefficient)?;
    let omega0 = derived.omega0;
    let gamma = derived.gamma.unwrap_or(0.0);
    let regime = MotionRegime::classify(gamma, omega0);

    let trajectory = match regime {
        MotionRegime::Undamped => undamped_trajectory(ic, omega0).2,
        MotionRegime::Underdamped => {
            let omega_d = model::damped_frequency(omega0, gamma)?;
            let amplitude =
                (ic.theta0.powi(2) + ((ic.theta_dot0 + gamma * ic.theta0) / omega_d).powi(2))
                    .sqrt();
            let phase = normalize_phase(
                (-(ic.theta_dot0 + gamma * ic.theta0) / omega_d).atan2(ic.theta0),
            );
            TrajectorySolution::Underdamped {
                gamma,
                omega_d,
                amplitude,
                phase,
            }
        }
        MotionRegime::Overdamped => {
            let discriminant = (gamma * gamma - omega0 * omega0).sqrt();
            let root1 = -gamma + discriminant;
            let root2 = -gamma - discriminant;
            let c1 = ic.theta0;
            let c2 = (ic.theta_dot0 - gamma * ic.theta0) / (root1 - root2);
            TrajectorySolution::Overdamped { c1, c2, root1, root2 }
        }
        MotionRegime::CriticallyDamped => TrajectorySolution::CriticallyDamped {
            gamma,
            c1: ic.theta0,
            c2: ic.theta_dot0 + gamma * ic.theta0,
        },
    };

    Ok(DampedSolution {
        omega0,
        gamma,
        inertia: derived.inertia,
        regime,
        trajectory,
    })
}

/// Solve the sinusoidally forced pendulum for its steady-state response.
///
/// Only the steady-state particular solution is produced; the
/// initial-condition-dependent transient is ignored.
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] on invalid inputs, or
/// [`PendulumError::NumericDomain`] at exact undamped resonance
/// (ω_f = ω₀ with γ = 0), where the steady-state amplitude diverges.
pub fn solve_forced(
    params: &PendulumParameters,
    damping: &DampingParameters,
    forcing: &ForcingParameters,
) -> PendulumResult<ForcedSolution> {
    params.validate_physical()?;
    damping.validate_physical()?;
    forcing.validate_physical()?;

    let derived = DerivedQuantities::damped(params, damping.coefficient)?;
    let omega0 = derived.omega0;
    let gamma = derived.gamma.unwrap_or(0.0);
    let omega_f = forcing.frequency;

    let detuning = omega0 * omega0 - omega_f * omega_f;
    let response = (detuning * detuning + (2.0 * gamma * omega_f).powi(2)).sqrt();
    if response == 0.0 {
        return Err(PendulumError::numeric_domain(format!(
            "steady-state amplitude diverges at undamped resonance \
             (omega_f={omega_f}, omega0={omega0}, gamma={gamma})"
        )));
    }

    let amplitude = forcing.amplitude / (derived.inertia * response);
    let phase = normalize_phase((2.0 * gamma * omega_f).atan2(detuning));
    let resonant = resonance::is_resonant(omega0, omega_f)?;

    Ok(ForcedSolution {
        omega0,
        inertia: derived.inertia,
        gamma,
        amplitude,
        phase,
        resonant,
        trajectory: TrajectorySolution::Forced {
            omega_f,
            amplitude,
            phase,
        },
    })
}
