//! Parameter value types for a pendulum simulation run.
//!
//! All types are plain data: serde-(de)serializable, schema-validated, and
//! recomputed fresh on every solve. Nothing here persists across runs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{PendulumError, PendulumResult};

/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Geometry and masses of the physical pendulum: a thin rigid rod pivoting
/// at one end, with a solid sphere attached at the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PendulumParameters {
    /// Rod mass m (kg).
    #[validate(range(min = 0.0))]
    pub rod_mass: f64,
    /// Sphere mass M (kg).
    #[validate(range(min = 0.0))]
    pub sphere_mass: f64,
    /// Rod length L (m).
    #[validate(range(min = 0.0))]
    pub rod_length: f64,
    /// Sphere radius R (m).
    #[validate(range(min = 0.0))]
    pub sphere_radius: f64,
    /// Gravitational acceleration g (m/s²).
    #[serde(default = "default_gravity")]
    #[validate(range(min = 0.0))]
    pub gravity: f64,
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            rod_mass: 1.0,
            sphere_mass: 0.5,
            rod_length: 1.0,
            sphere_radius: 0.1,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl PendulumParameters {
    /// Check physical invariants: finite values, non-negative masses and
    /// geometry, strictly positive gravity.
    ///
    /// The zero-inertia case (both masses zero) is reported by
    /// [`crate::model::moment_of_inertia`], which owns that invariant.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] on violation.
    pub fn validate_physical(&self) -> PendulumResult<()> {
        let fields = [
            ("rod_mass", self.rod_mass),
            ("sphere_mass", self.sphere_mass),
            ("rod_length", self.rod_length),
            ("sphere_radius", self.sphere_radius),
            ("gravity", self.gravity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PendulumError::invalid_parameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(PendulumError::invalid_parameter(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.gravity == 0.0 {
            return Err(PendulumError::invalid_parameter(
                "gravity must be strictly positive",
            ));
        }
        Ok(())
    }
}

/// Initial angle and angular velocity of the pendulum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InitialConditions {
    /// Initial angle θ₀ from vertical (rad).
    pub theta0: f64,
    /// Initial angular velocity θ̇₀ (rad/s).
    pub theta_dot0: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            theta0: 0.3,
            theta_dot0: 0.0,
        }
    }
}

impl InitialConditions {
    /// Check that both values are finite.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] when either value is
    /// NaN or infinite.
    pub fn validate_physical(&self) -> PendulumResult<()> {
        if !self.theta0.is_finite() || !self.theta_dot0.is_finite() {
            return Err(PendulumError::invalid_parameter(
                "initial conditions must be finite",
            ));
        }
        Ok(())
    }
}

/// Viscous damping applied at the pivot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DampingParameters {
    /// Damping coefficient b (kg·m²/s).
    #[validate(range(min = 0.0))]
    pub coefficient: f64,
}

impl DampingParameters {
    /// Check that the coefficient is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] on violation.
    pub fn validate_physical(&self) -> PendulumResult<()> {
        if !self.coefficient.is_finite() || self.coefficient < 0.0 {
            return Err(PendulumError::invalid_parameter(format!(
                "damping coefficient must be finite and non-negative, got {}",
                self.coefficient
            )));
        }
        Ok(())
    }
}

/// Sinusoidal driving torque for the forced regime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ForcingParameters {
    /// Driving force amplitude F₀.
    #[validate(range(min = 0.0))]
    pub amplitude: f64,
    /// Driving angular frequency ω_f (rad/s).
    #[validate(range(min = 0.0))]
    pub frequency: f64,
}

impl ForcingParameters {
    /// Check that amplitude and frequency are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] on violation.
    pub fn validate_physical(&self) -> PendulumResult<()> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(PendulumError::invalid_parameter(format!(
                "forcing amplitude must be finite and non-negative, got {}",
                self.amplitude
            )));
        }
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Err(PendulumError::invalid_parameter(format!(
                "forcing frequency must be finite and non-negative, got {}",
                self.frequency
            )));
        }
        Ok(())
    }
}
