//! Physical model of the rod-plus-sphere pendulum.
//!
//! Derives the quantities the trajectory solver needs:
//! - Moment of inertia I about the pivot
//! - Natural angular frequency ω₀
//! - Damping rate γ (damped/forced regimes)
//! - Damped angular frequency ω_d (underdamped regime only)
//!
//! The rod contributes thin-rod inertia about its end; the sphere
//! contributes solid-sphere inertia shifted to the pivot by the
//! parallel-axis theorem. The same inertia expression feeds both
//! `moment_of_inertia` and the denominator of `natural_frequency`.

use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, PendulumResult};
use crate::params::PendulumParameters;

/// Moment of inertia about the pivot:
/// I = (1/3)·m·L² + M·(L+R)² + (2/5)·M·R².
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] when both masses are
/// non-positive (zero inertia makes the natural frequency undefined).
pub fn moment_of_inertia(params: &PendulumParameters) -> PendulumResult<f64> {
    if params.rod_mass <= 0.0 && params.sphere_mass <= 0.0 {
        return Err(PendulumError::invalid_parameter(
            "rod and sphere masses cannot both be zero (zero moment of inertia)",
        ));
    }
    let arm = params.rod_length + params.sphere_radius;
    Ok(params.rod_mass * params.rod_length.powi(2) / 3.0
        + params.sphere_mass * arm.powi(2)
        + 0.4 * params.sphere_mass * params.sphere_radius.powi(2))
}

/// Natural angular frequency of the undamped pendulum:
/// ω₀ = sqrt(((m·L/2 + M·(L+R))·g) / I).
///
/// The numerator is the gravitational restoring torque per radian; the
/// denominator is the same inertia expression as [`moment_of_inertia`].
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] when the inertia
/// denominator is not strictly positive.
pub fn natural_frequency(params: &PendulumParameters) -> PendulumResult<f64> {
    let arm = params.rod_length + params.sphere_radius;
    let torque_arm = params.rod_mass * params.rod_length / 2.0 + params.sphere_mass * arm;
    let inertia = moment_of_inertia(params)?;
    if inertia <= 0.0 {
        return Err(PendulumError::invalid_parameter(format!(
            "moment of inertia must be strictly positive, got {inertia}"
        )));
    }
    Ok((torque_arm * params.gravity / inertia).sqrt())
}

/// Damping rate γ = b / (2·I).
///
/// # Errors
///
/// Returns [`PendulumError::InvalidParameter`] when the inertia is not
/// strictly positive.
pub fn damping_rate(coefficient: f64, inertia: f64) -> PendulumResult<f64> {
    if inertia <= 0.0 {
        return Err(PendulumError::invalid_parameter(format!(
            "damping rate requires strictly positive inertia, got {inertia}"
        )));
    }
    Ok(coefficient / (2.0 * inertia))
}

/// Damped angular frequency ω_d = sqrt(ω₀² − γ²).
///
/// Real-valued only in the underdamped regime; callers classify the
/// regime first and take the overdamped/critical branches otherwise.
///
/// # Errors
///
/// Returns [`PendulumError::NumericDomain`] when γ ≥ ω₀.
pub fn damped_frequency(omega0: f64, gamma: f64) -> PendulumResult<f64> {
    if gamma >= omega0 {
        return Err(PendulumError::numeric_domain(format!(
            "damped frequency requires gamma < omega0 (gamma={gamma}, omega0={omega0})"
        )));
    }
    Ok((omega0 * omega0 - gamma * gamma).sqrt())
}

/// Quantities derived once per simulation run, immutable thereafter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DerivedQuantities {
    /// Moment of inertia I about the pivot.
    pub inertia: f64,
    /// Natural angular frequency ω₀.
    pub omega0: f64,
    /// Damping rate γ; `None` for the free (undamped) run.
    pub gamma: Option<f64>,
    /// Damped angular frequency ω_d; `Some` only when γ < ω₀.
    pub omega_d: Option<f64>,
}

impl DerivedQuantities {
    /// Derive quantities for a free (undamped) run.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] on invalid geometry
    /// or masses.
    pub fn free(params: &PendulumParameters) -> PendulumResult<Self> {
        Ok(Self {
            inertia: moment_of_inertia(params)?,
            omega0: natural_frequency(params)?,
            gamma: None,
            omega_d: None,
        })
    }

    /// Derive quantities for a damped or forced run.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] on invalid geometry,
    /// masses, or damping coefficient.
    pub fn damped(params: &PendulumParameters, coefficient: f64) -> PendulumResult<Self> {
        let inertia = moment_of_inertia(params)?;
        let omega0 = natural_frequency(params)?;
        let gamma = damping_rate(coefficient, inertia)?;
        let omega_d = if gamma < omega0 {
            Some((omega0 * omega0 - gamma * gamma).sqrt())
        } else {
            None
        };
        Ok(Self {
            inertia,
            omega0,
            gamma: Some(gamma),
            omega_d,
        })
    }
}
