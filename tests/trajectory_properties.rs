//! Cross-module properties of the closed-form trajectories.

use pendular::model;
use pendular::prelude::*;

fn reference_params() -> PendulumParameters {
    PendulumParameters {
        rod_mass: 1.0,
        sphere_mass: 0.5,
        rod_length: 1.0,
        sphere_radius: 0.1,
        gravity: 9.81,
    }
}

// P1: solve_free round-trips the initial conditions through
// amplitude/phase and back.
#[test]
fn free_trajectory_round_trips_initial_conditions() {
    let params = reference_params();
    for theta0 in [-0.5, -0.1, 0.2, 0.8] {
        for theta_dot0 in [-1.0, 0.0, 0.3, 2.0] {
            if theta0 == 0.0 && theta_dot0 == 0.0 {
                continue; // degenerate A = 0, documented limitation
            }
            let ic = InitialConditions { theta0, theta_dot0 };
            let solution = solve_free(&params, &ic).unwrap();
            let at_zero = solution.trajectory.evaluate(0.0);
            assert!(
                (at_zero.theta - theta0).abs() < 1e-9,
                "theta0={theta0}, theta_dot0={theta_dot0}: theta(0)={}",
                at_zero.theta
            );
            assert!(
                (at_zero.theta_dot - theta_dot0).abs() < 1e-9,
                "theta0={theta0}, theta_dot0={theta_dot0}: theta_dot(0)={}",
                at_zero.theta_dot
            );
        }
    }
}

// P2: regime classification is a total, non-overlapping partition.
#[test]
fn regime_partition_is_total_and_exclusive() {
    let omega0 = 3.31;
    for step in 0..1000 {
        let gamma = f64::from(step) * 0.01;
        let regime = MotionRegime::classify(gamma, omega0);
        let hits = [
            MotionRegime::Underdamped,
            MotionRegime::Overdamped,
            MotionRegime::CriticallyDamped,
        ]
        .iter()
        .filter(|&&candidate| candidate == regime)
        .count();
        assert_eq!(hits, 1, "gamma={gamma}");
    }
    // The boundary itself.
    assert_eq!(
        MotionRegime::classify(omega0, omega0),
        MotionRegime::CriticallyDamped
    );
}

// P3: the underdamped envelope bound |theta(t2)| <= |theta(t1)|·e^(-gamma·(t2-t1))
// holds whenever t1 sits on the envelope (peaks), and the trajectory never
// escapes A·e^(-gamma·t).
#[test]
fn underdamped_envelope_strictly_decays() {
    let solution = solve_damped(
        &reference_params(),
        &InitialConditions {
            theta0: 0.4,
            theta_dot0: 0.0,
        },
        &DampingParameters { coefficient: 0.8 },
    )
    .unwrap();
    assert_eq!(solution.regime, MotionRegime::Underdamped);
    let amplitude = solution.amplitude().unwrap();
    let gamma = solution.gamma;

    let mut previous_bound = f64::INFINITY;
    for step in 0..500 {
        let t = f64::from(step) * 0.02;
        let theta = solution.trajectory.evaluate(t).theta;
        let bound = amplitude * (-gamma * t).exp();
        assert!(theta.abs() <= bound + 1e-12, "t={t}");
        assert!(bound < previous_bound || step == 0);
        previous_bound = bound;
    }
}

// P4: non-oscillatory regimes change sign at most once.
#[test]
fn overdamped_and_critical_never_oscillate() {
    let params = reference_params();
    let cases = [
        // (theta0, theta_dot0, b): overdamped, including a velocity kick
        // through zero.
        (0.3, 0.0, 50.0),
        (0.3, -5.0, 50.0),
        (-0.2, 1.0, 80.0),
    ];
    for (theta0, theta_dot0, coefficient) in cases {
        let solution = solve_damped(
            &params,
            &InitialConditions { theta0, theta_dot0 },
            &DampingParameters { coefficient },
        )
        .unwrap();
        assert!(!solution.regime.is_oscillatory());

        let mut sign_changes = 0;
        let mut prev = solution.trajectory.evaluate(0.0).theta;
        for step in 1..2000 {
            let theta = solution.trajectory.evaluate(f64::from(step) * 0.01).theta;
            if theta * prev < 0.0 {
                sign_changes += 1;
            }
            prev = theta;
        }
        assert!(
            sign_changes <= 1,
            "theta0={theta0}, theta_dot0={theta_dot0}, b={coefficient}: {sign_changes} sign changes"
        );
    }

    // Critically damped with a velocity kick toward zero.
    let critical_params = PendulumParameters {
        rod_mass: 0.0,
        sphere_mass: 2.0,
        rod_length: 1.0,
        sphere_radius: 0.0,
        gravity: 9.81,
    };
    let inertia = model::moment_of_inertia(&critical_params).unwrap();
    let omega0 = model::natural_frequency(&critical_params).unwrap();
    let solution = solve_damped(
        &critical_params,
        &InitialConditions {
            theta0: 0.3,
            theta_dot0: -2.0,
        },
        &DampingParameters {
            coefficient: 2.0 * inertia * omega0,
        },
    )
    .unwrap();
    assert_eq!(solution.regime, MotionRegime::CriticallyDamped);

    let mut sign_changes = 0;
    let mut prev = solution.trajectory.evaluate(0.0).theta;
    for step in 1..2000 {
        let theta = solution.trajectory.evaluate(f64::from(step) * 0.01).theta;
        if theta * prev < 0.0 {
            sign_changes += 1;
        }
        prev = theta;
    }
    assert!(sign_changes <= 1, "critical: {sign_changes} sign changes");
}

// P5: the concrete reference scenario.
#[test]
fn reference_scenario_amplitude_and_phase() {
    let params = reference_params();

    let inertia = model::moment_of_inertia(&params).unwrap();
    assert!((inertia - (1.0 / 3.0 + 0.605 + 0.002)).abs() < 1e-12);

    let omega0 = model::natural_frequency(&params).unwrap();
    assert!((omega0 * omega0 * inertia - 1.05 * 9.81).abs() < 1e-9);

    let solution = solve_free(
        &params,
        &InitialConditions {
            theta0: 0.3,
            theta_dot0: 0.0,
        },
    )
    .unwrap();
    assert!((solution.amplitude - 0.3).abs() < 1e-12);
    // atan2(-0, 1) = -0: no 2π correction applied, phase is exactly zero.
    assert!(solution.phase.abs() < 1e-12);
    assert!((solution.omega0 - omega0).abs() < f64::EPSILON);
}

// P6: exact critical damping boundary, constructed so gamma == omega0
// holds bit-for-bit (inertia a power of two makes b/(2I) exact).
#[test]
fn critical_damping_boundary_selects_critical() {
    let params = PendulumParameters {
        rod_mass: 0.0,
        sphere_mass: 2.0,
        rod_length: 1.0,
        sphere_radius: 0.0,
        gravity: 9.81,
    };
    let inertia = model::moment_of_inertia(&params).unwrap();
    let omega0 = model::natural_frequency(&params).unwrap();
    let coefficient = 2.0 * inertia * omega0;

    let solution = solve_damped(
        &params,
        &InitialConditions {
            theta0: 0.3,
            theta_dot0: 0.0,
        },
        &DampingParameters { coefficient },
    )
    .unwrap();
    assert_eq!(solution.regime, MotionRegime::CriticallyDamped);

    // The selection is strict equality: one ulp more damping tips it over.
    let nudged = f64::from_bits(coefficient.to_bits() + 8);
    let over = solve_damped(
        &params,
        &InitialConditions {
            theta0: 0.3,
            theta_dot0: 0.0,
        },
        &DampingParameters { coefficient: nudged },
    )
    .unwrap();
    assert_eq!(over.regime, MotionRegime::Overdamped);
}

// P7: resonance boundary cases.
#[test]
fn resonance_boundaries() {
    use pendular::resonance::is_resonant;

    let omega0 = 3.0;
    assert!(is_resonant(omega0, omega0).unwrap());
    // Exactly 50% off must not be resonant.
    assert!(!is_resonant(omega0, omega0 * 1.5).unwrap());
    assert!(!is_resonant(omega0, omega0 * 0.5).unwrap());
}

// P8: zero driving force gives an identically zero steady state for any
// detuned frequency.
#[test]
fn forced_zero_amplitude_is_identically_zero() {
    let params = reference_params();
    let omega0 = model::natural_frequency(&params).unwrap();
    for omega_f in [0.5, omega0 * 0.7, omega0 * 1.3, 10.0] {
        let solution = solve_forced(
            &params,
            &DampingParameters { coefficient: 0.4 },
            &ForcingParameters {
                amplitude: 0.0,
                frequency: omega_f,
            },
        )
        .unwrap();
        assert_eq!(solution.amplitude, 0.0);
        for step in 0..100 {
            let sample = solution.trajectory.evaluate(f64::from(step) * 0.1);
            assert_eq!(sample.theta, 0.0, "omega_f={omega_f}");
        }
    }
}

// P9: evaluate is a pure function of t — arbitrary, repeated, and
// non-monotonic call orders agree.
#[test]
fn evaluate_is_idempotent_over_call_order() {
    let solution = solve_damped(
        &reference_params(),
        &InitialConditions {
            theta0: 0.3,
            theta_dot0: 0.2,
        },
        &DampingParameters { coefficient: 0.5 },
    )
    .unwrap();

    let forward: Vec<PendulumSample> = (0..50)
        .map(|step| solution.trajectory.evaluate(f64::from(step) * 0.1))
        .collect();
    let backward: Vec<PendulumSample> = (0..50)
        .rev()
        .map(|step| solution.trajectory.evaluate(f64::from(step) * 0.1))
        .collect();
    for (a, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(a, b);
    }
}
