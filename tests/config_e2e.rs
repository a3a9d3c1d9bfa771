//! End-to-end flow: YAML config → solve → session → trace.

use pendular::prelude::*;

const DAMPED_YAML: &str = "\
mode: damped
pendulum:
  rod_mass: 1.0
  sphere_mass: 0.5
  rod_length: 1.0
  sphere_radius: 0.1
initial:
  theta0: 0.3
  theta_dot0: 0.0
damping:
  coefficient: 0.5
";

#[test]
fn yaml_to_session_flow() {
    let config = SimulationConfig::from_yaml(DAMPED_YAML).unwrap();
    let solution = config.solve().unwrap();

    let mut session = solution.into_session();
    for step in 0..600 {
        let sample = session.sample(f64::from(step) * 0.016);
        assert!(sample.theta.is_finite());
        assert!(sample.theta_dot.is_finite());
    }
    // Trace is bounded to its capacity; oldest samples were evicted.
    assert_eq!(session.trace().len(), 500);
    let first_kept = session.trace().iter().next().unwrap().time;
    assert!((first_kept - 100.0 * 0.016).abs() < 1e-12);
}

#[test]
fn restart_replaces_active_solution() {
    let damped = SimulationConfig::from_yaml(DAMPED_YAML).unwrap();
    let mut session = damped.solve().unwrap().into_session();
    session.sample(0.1);

    let forced = SimulationConfig::builder()
        .damping(0.5)
        .forcing(1.0, 2.0)
        .build();
    let replacement = forced.solve().unwrap();
    session.restart(*replacement.trajectory());

    assert!(session.trace().is_empty());
    assert!(matches!(
        session.solution(),
        TrajectorySolution::Forced { .. }
    ));
}

#[test]
fn refusal_surfaces_no_solution() {
    // Exact undamped resonance must refuse rather than return a garbage
    // trajectory.
    let params = PendulumParameters::default();
    let omega0 = pendular::model::natural_frequency(&params).unwrap();
    let config = SimulationConfig::builder()
        .pendulum(params)
        .forcing(1.0, omega0)
        .build();
    let err = config.solve().unwrap_err();
    assert!(err.is_refusal());
}

#[test]
fn config_load_missing_file_is_io_error() {
    let err = SimulationConfig::load("/nonexistent/run.yaml").unwrap_err();
    assert!(matches!(err, PendulumError::Io(_)));
    assert!(!err.is_refusal());
}

#[test]
fn reports_expose_displayed_quantities() {
    let config = SimulationConfig::from_yaml(DAMPED_YAML).unwrap();
    let Solution::Damped(solution) = config.solve().unwrap() else {
        panic!("expected damped solution");
    };

    // The quantities a front end displays after a damped run.
    assert!(solution.omega0 > 0.0);
    assert!(solution.gamma > 0.0);
    assert!(solution.inertia > 0.0);
    assert_eq!(solution.regime, MotionRegime::Underdamped);
    assert!(solution.amplitude().is_some());
    assert!(solution.phase().is_some());
}
