//! # pendular
//!
//! Closed-form dynamics of a physical pendulum (rigid rod plus end sphere).
//!
//! Computes the analytical motion under three regimes:
//! - Free oscillation: θ(t) = A·cos(ω₀t + φ)
//! - Damped oscillation: underdamped, overdamped, or critically damped
//! - Sinusoidally forced steady-state oscillation
//!
//! All solutions are closed-form; there is no numerical integration.
//! The crate is the dynamics engine only — rendering, charting, and
//! timers are external collaborators that call
//! [`solver::TrajectorySolution::evaluate`] at their own cadence.
//!
//! ## Example
//!
//! ```rust
//! use pendular::prelude::*;
//!
//! let params = PendulumParameters::default();
//! let initial = InitialConditions { theta0: 0.3, theta_dot0: 0.0 };
//!
//! let solution = solve_free(&params, &initial)?;
//! let sample = solution.trajectory.evaluate(0.25);
//! assert!(sample.theta.is_finite());
//! # Ok::<(), pendular::PendulumError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::suboptimal_flops,  // Formula layout mirrors the derivation
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::float_cmp,         // Exact regime boundaries are intentional
    clippy::missing_const_for_fn,
)]

pub mod config;
pub mod error;
pub mod model;
pub mod params;
pub mod regime;
pub mod resonance;
pub mod session;
pub mod solver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{SimulationConfig, SimulationConfigBuilder, SimulationMode, Solution};
    pub use crate::error::{PendulumError, PendulumResult};
    pub use crate::model::DerivedQuantities;
    pub use crate::params::{
        DampingParameters, ForcingParameters, InitialConditions, PendulumParameters,
    };
    pub use crate::regime::MotionRegime;
    pub use crate::session::{SimulationSession, TraceBuffer, TraceSample};
    pub use crate::solver::{
        solve_damped, solve_forced, solve_free, DampedSolution, ForcedSolution, FreeSolution,
        PendulumSample, TrajectorySolution,
    };
}

/// Re-export for public API
pub use error::{PendulumError, PendulumResult};
