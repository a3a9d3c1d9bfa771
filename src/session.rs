//! Presentation-layer session state.
//!
//! The engine itself is stateless and reentrant; the only state that
//! outlives a solve is the currently active [`TrajectorySolution`], owned
//! by the presentation layer through a [`SimulationSession`]. Starting a
//! new run replaces the solution wholesale and clears the recorded trace.
//!
//! [`TraceBuffer`] holds the chart-ready samples an animation loop
//! collects, bounded to a fixed number of points with oldest-first
//! eviction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::solver::{PendulumSample, TrajectorySolution};

/// Default trace capacity, matching the chart history length.
pub const DEFAULT_TRACE_CAPACITY: usize = 500;

/// One recorded point of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSample {
    /// Sample time (s).
    pub time: f64,
    /// Angular displacement θ (rad).
    pub theta: f64,
    /// Angular velocity θ̇ (rad/s).
    pub theta_dot: f64,
}

/// Bounded FIFO buffer of trajectory samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBuffer {
    capacity: usize,
    samples: VecDeque<TraceSample>,
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceBuffer {
    /// Create a buffer with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRACE_CAPACITY)
    }

    /// Create a buffer holding at most `capacity` samples (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a sample, evicting the oldest when full.
    pub fn push(&mut self, sample: TraceSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples retained.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently recorded sample.
    #[must_use]
    pub fn latest(&self) -> Option<&TraceSample> {
        self.samples.back()
    }

    /// Iterate samples oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceSample> {
        self.samples.iter()
    }

    /// Drop all recorded samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// The active simulation run as seen by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSession {
    solution: TrajectorySolution,
    trace: TraceBuffer,
}

impl SimulationSession {
    /// Start a session around a freshly solved trajectory.
    #[must_use]
    pub fn new(solution: TrajectorySolution) -> Self {
        Self {
            solution,
            trace: TraceBuffer::new(),
        }
    }

    /// Start a session with a custom trace capacity.
    #[must_use]
    pub fn with_trace_capacity(solution: TrajectorySolution, capacity: usize) -> Self {
        Self {
            solution,
            trace: TraceBuffer::with_capacity(capacity),
        }
    }

    /// Replace the active solution wholesale and clear the trace.
    pub fn restart(&mut self, solution: TrajectorySolution) {
        self.solution = solution;
        self.trace.clear();
    }

    /// Currently active trajectory.
    #[must_use]
    pub const fn solution(&self) -> &TrajectorySolution {
        &self.solution
    }

    /// Evaluate the trajectory at `time` and record the sample.
    pub fn sample(&mut self, time: f64) -> PendulumSample {
        let sample = self.solution.evaluate(time);
        self.trace.push(TraceSample {
            time,
            theta: sample.theta,
            theta_dot: sample.theta_dot,
        });
        sample
    }

    /// Evaluate without recording.
    #[must_use]
    pub fn peek(&self, time: f64) -> PendulumSample {
        self.solution.evaluate(time)
    }

    /// Recorded samples of the current run.
    #[must_use]
    pub const fn trace(&self) -> &TraceBuffer {
        &self.trace
    }
}
