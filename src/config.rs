//! Run configuration with YAML schema and validation.
//!
//! A [`SimulationConfig`] describes one simulation run: which regime to
//! solve and the parameter blocks it needs. Mistake-proofing happens in
//! three layers:
//! - Type-safe structs with `deny_unknown_fields`
//! - Schema validation via the `validator` derive
//! - Semantic validation of cross-field rules (a forced run needs a
//!   forcing block, a free run must not carry one)

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{PendulumError, PendulumResult};
use crate::params::{
    DampingParameters, ForcingParameters, InitialConditions, PendulumParameters,
};
use crate::session::SimulationSession;
use crate::solver::{
    self, DampedSolution, ForcedSolution, FreeSolution, TrajectorySolution,
};

/// Which regime a run solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    /// Free oscillation, no damping term.
    Free,
    /// Damped oscillation, regime classified from γ vs ω₀.
    Damped,
    /// Sinusoidally forced steady-state oscillation.
    Forced,
}

/// Top-level configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Regime to solve.
    pub mode: SimulationMode,

    /// Pendulum geometry and masses.
    #[validate(nested)]
    #[serde(default)]
    pub pendulum: PendulumParameters,

    /// Initial angle and angular velocity (ignored by the forced
    /// steady-state solution).
    #[validate(nested)]
    #[serde(default)]
    pub initial: InitialConditions,

    /// Damping block; required for damped and forced modes.
    #[validate(nested)]
    #[serde(default)]
    pub damping: Option<DampingParameters>,

    /// Forcing block; required for forced mode.
    #[validate(nested)]
    #[serde(default)]
    pub forcing: Option<ForcingParameters>,
}

impl SimulationConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> PendulumResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> PendulumResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Validate cross-field constraints beyond the schema.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] when a mode is missing
    /// the blocks it needs or carries blocks it cannot use.
    pub fn validate_semantic(&self) -> PendulumResult<()> {
        match self.mode {
            SimulationMode::Free => {
                if self.damping.is_some() {
                    return Err(PendulumError::invalid_parameter(
                        "free mode does not take a damping block",
                    ));
                }
                if self.forcing.is_some() {
                    return Err(PendulumError::invalid_parameter(
                        "free mode does not take a forcing block",
                    ));
                }
            }
            SimulationMode::Damped => {
                if self.damping.is_none() {
                    return Err(PendulumError::invalid_parameter(
                        "damped mode requires a damping block",
                    ));
                }
                if self.forcing.is_some() {
                    return Err(PendulumError::invalid_parameter(
                        "damped mode does not take a forcing block",
                    ));
                }
            }
            SimulationMode::Forced => {
                if self.damping.is_none() {
                    return Err(PendulumError::invalid_parameter(
                        "forced mode requires a damping block",
                    ));
                }
                if self.forcing.is_none() {
                    return Err(PendulumError::invalid_parameter(
                        "forced mode requires a forcing block",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Solve the run this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error when required blocks are missing or the engine
    /// refuses the inputs.
    pub fn solve(&self) -> PendulumResult<Solution> {
        match self.mode {
            SimulationMode::Free => Ok(Solution::Free(solver::solve_free(
                &self.pendulum,
                &self.initial,
            )?)),
            SimulationMode::Damped => {
                let damping = self.damping.as_ref().ok_or_else(|| {
                    PendulumError::invalid_parameter("damped mode requires a damping block")
                })?;
                Ok(Solution::Damped(solver::solve_damped(
                    &self.pendulum,
                    &self.initial,
                    damping,
                )?))
            }
            SimulationMode::Forced => {
                let damping = self.damping.as_ref().ok_or_else(|| {
                    PendulumError::invalid_parameter("forced mode requires a damping block")
                })?;
                let forcing = self.forcing.as_ref().ok_or_else(|| {
                    PendulumError::invalid_parameter("forced mode requires a forcing block")
                })?;
                Ok(Solution::Forced(solver::solve_forced(
                    &self.pendulum,
                    damping,
                    forcing,
                )?))
            }
        }
    }
}

/// Solution produced by [`SimulationConfig::solve`], one variant per mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Solution {
    /// Free oscillation report.
    Free(FreeSolution),
    /// Damped oscillation report.
    Damped(DampedSolution),
    /// Forced steady-state report.
    Forced(ForcedSolution),
}

impl Solution {
    /// The evaluable trajectory regardless of mode.
    #[must_use]
    pub const fn trajectory(&self) -> &TrajectorySolution {
        match self {
            Self::Free(solution) => &solution.trajectory,
            Self::Damped(solution) => &solution.trajectory,
            Self::Forced(solution) => &solution.trajectory,
        }
    }

    /// Wrap the trajectory in a fresh presentation session.
    #[must_use]
    pub fn into_session(self) -> SimulationSession {
        SimulationSession::new(*self.trajectory())
    }
}

/// Configuration builder for programmatic construction.
///
/// The mode is inferred: supplying forcing selects forced mode, supplying
/// only damping selects damped mode, otherwise the run is free.
#[derive(Debug, Default)]
pub struct SimulationConfigBuilder {
    pendulum: Option<PendulumParameters>,
    initial: Option<InitialConditions>,
    damping: Option<f64>,
    forcing: Option<(f64, f64)>,
}

impl SimulationConfigBuilder {
    /// Set the pendulum geometry and masses.
    #[must_use]
    pub fn pendulum(mut self, params: PendulumParameters) -> Self {
        self.pendulum = Some(params);
        self
    }

    /// Set the initial conditions.
    #[must_use]
    pub fn initial(mut self, ic: InitialConditions) -> Self {
        self.initial = Some(ic);
        self
    }

    /// Set the damping coefficient b.
    #[must_use]
    pub const fn damping(mut self, coefficient: f64) -> Self {
        self.damping = Some(coefficient);
        self
    }

    /// Set the driving force amplitude F₀ and angular frequency ω_f.
    #[must_use]
    pub const fn forcing(mut self, amplitude: f64, frequency: f64) -> Self {
        self.forcing = Some((amplitude, frequency));
        self
    }

    /// Build the configuration, inferring the mode from supplied blocks.
    #[must_use]
    pub fn build(self) -> SimulationConfig {
        let mode = match (&self.damping, &self.forcing) {
            (_, Some(_)) => SimulationMode::Forced,
            (Some(_), None) => SimulationMode::Damped,
            (None, None) => SimulationMode::Free,
        };
        SimulationConfig {
            mode,
            pendulum: self.pendulum.unwrap_or_default(),
            initial: self.initial.unwrap_or_default(),
            // Forced mode defaults to an undamped drive unless set.
            damping: match (mode, self.damping) {
                (SimulationMode::Free, _) => None,
                (_, Some(coefficient)) => Some(DampingParameters { coefficient }),
                (SimulationMode::Forced, None) => Some(DampingParameters { coefficient: 0.0 }),
                (SimulationMode::Damped, None) => None,
            },
            forcing: self.forcing.map(|(amplitude, frequency)| ForcingParameters {
                amplitude,
                frequency,
            }),
        }
    }
}
