//! Simulation driver: forward/backward stepping, trajectory recording,
//! random seeding, and cycle detection for the one-dimensional variant.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cell::{LineCell, LineHeading, PlaneCell, PlaneHeading};
use crate::line::AntLine;
use crate::plane::AntPlane;
use crate::{LatticeError, StepDirection};

/// Step-count and seeding parameters shared by both lattice variants.
///
/// Defaults mirror the two-dimensional run: 3000 steps, reversal at 1000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Total number of steps to run.
    pub max_steps: u64,
    /// Step index at which the run switches permanently from forward to
    /// backward stepping; `None` never reverses.
    pub reverse_at: Option<u64>,
    /// Optional RNG seed for reproducible seeding.
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: 3000,
            reverse_at: Some(1000),
            rng_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.max_steps == 0 {
            return Err(LatticeError::InvalidConfig("step count must be non-zero"));
        }
        Ok(())
    }

    /// Direction of the step at `step` under the permanent
    /// forward-to-backward transition.
    #[must_use]
    pub fn direction_at(&self, step: u64) -> StepDirection {
        match self.reverse_at {
            Some(reverse_at) if step >= reverse_at => StepDirection::Backward,
            _ => StepDirection::Forward,
        }
    }
}

/// Per-step trajectory entry handed to rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based step index.
    pub step: u64,
    /// Direction this step moved through time.
    pub direction: StepDirection,
    /// Color plane after the step, one 0/1 byte per cell, row-major.
    pub colors: Vec<u8>,
    /// Coarse-grained entropy of the color plane after the step.
    pub entropy: f64,
}

/// First repetition of a lattice state in a one-dimensional run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleHit {
    /// Step whose post-step state was seen again.
    pub first_seen: u64,
    /// Step at which the repetition occurred.
    pub repeated_at: u64,
}

/// Append-only record of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    records: Vec<StepRecord>,
    reversed_at: Option<u64>,
    cycle: Option<CycleHit>,
}

impl Trajectory {
    /// Every recorded step, in order.
    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Entropy sequence, one value per recorded step.
    #[must_use]
    pub fn entropies(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.entropy).collect()
    }

    /// Step at which the forward-to-backward transition occurred, if it did.
    #[must_use]
    pub const fn reversed_at(&self) -> Option<u64> {
        self.reversed_at
    }

    /// Detected state repetition, if the run stopped on one.
    #[must_use]
    pub const fn cycle(&self) -> Option<CycleHit> {
        self.cycle
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drives a two-dimensional lattice through a configured run.
#[derive(Debug)]
pub struct PlaneSimulation {
    plane: AntPlane,
    config: SimulationConfig,
}

impl PlaneSimulation {
    /// Validates the configuration and wraps the seeded lattice.
    pub fn new(plane: AntPlane, config: SimulationConfig) -> Result<Self, LatticeError> {
        config.validate()?;
        Ok(Self { plane, config })
    }

    /// Current lattice state.
    #[must_use]
    pub fn plane(&self) -> &AntPlane {
        &self.plane
    }

    /// Simulation parameters.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the configured number of steps, recording the color plane and
    /// its entropy after each one.
    pub fn run(&mut self) -> Trajectory {
        self.run_with(|_| {})
    }

    /// Like [`Self::run`], invoking `observer` with each record as it is
    /// produced.
    pub fn run_with<F>(&mut self, mut observer: F) -> Trajectory
    where
        F: FnMut(&StepRecord),
    {
        let mut trajectory = Trajectory::default();
        for step in 0..self.config.max_steps {
            let direction = self.config.direction_at(step);
            match direction {
                StepDirection::Forward => self.plane.step_forward(),
                StepDirection::Backward => self.plane.step_backward(),
            }
            if self.config.reverse_at == Some(step) {
                trajectory.reversed_at = Some(step);
            }
            let record = StepRecord {
                step,
                direction,
                colors: self.plane.color_plane(),
                entropy: self.plane.entropy(),
            };
            observer(&record);
            trajectory.records.push(record);
        }
        trajectory
    }
}

/// Drives a one-dimensional lattice through a configured run, stopping
/// early when the lattice revisits a previous state.
///
/// The update rule is invertible over a finite state space, so every long
/// enough forward run terminates here.
#[derive(Debug)]
pub struct LineSimulation {
    line: AntLine,
    config: SimulationConfig,
}

impl LineSimulation {
    /// Validates the configuration and wraps the seeded lattice.
    pub fn new(line: AntLine, config: SimulationConfig) -> Result<Self, LatticeError> {
        config.validate()?;
        Ok(Self { line, config })
    }

    /// Current lattice state.
    #[must_use]
    pub fn line(&self) -> &AntLine {
        &self.line
    }

    /// Simulation parameters.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs up to the configured number of steps, recording the color plane
    /// and its entropy after each one and stopping early on the first
    /// repeated full lattice state.
    pub fn run(&mut self) -> Trajectory {
        self.run_with(|_| {})
    }

    /// Like [`Self::run`], invoking `observer` with each record as it is
    /// produced.
    pub fn run_with<F>(&mut self, mut observer: F) -> Trajectory
    where
        F: FnMut(&StepRecord),
    {
        let mut trajectory = Trajectory::default();
        let mut seen: HashMap<Vec<u8>, u64> = HashMap::new();
        for step in 0..self.config.max_steps {
            let direction = self.config.direction_at(step);
            match direction {
                StepDirection::Forward => self.line.step_forward(),
                StepDirection::Backward => self.line.step_backward(),
            }
            if self.config.reverse_at == Some(step) {
                trajectory.reversed_at = Some(step);
            }
            let record = StepRecord {
                step,
                direction,
                colors: self.line.color_plane(),
                entropy: self.line.entropy(),
            };
            observer(&record);
            trajectory.records.push(record);

            let state = self.line.cells().to_vec();
            if let Some(&first_seen) = seen.get(&state) {
                trajectory.cycle = Some(CycleHit {
                    first_seen,
                    repeated_at: step,
                });
                return trajectory;
            }
            seen.insert(state, step);
        }
        trajectory
    }
}

/// Scatters `count` ants across a two-dimensional lattice, each at a
/// uniformly random cell with a uniformly random heading, colors left
/// white.
///
/// Cells are assigned, not merged: a position drawn twice ends up holding a
/// single ant, so the at-most-one-ant-per-heading invariant holds by
/// construction.
pub fn scatter_plane_ants<R: Rng>(plane: &mut AntPlane, rng: &mut R, count: u32) {
    for _ in 0..count {
        let x = rng.random_range(0..plane.width());
        let y = rng.random_range(0..plane.height());
        let heading = PlaneHeading::ALL[rng.random_range(0..PlaneHeading::ALL.len())];
        plane.set_cell(x, y, PlaneCell::with_ant(heading));
    }
}

/// Scatters `count` ants across a one-dimensional lattice; same contract as
/// [`scatter_plane_ants`].
pub fn scatter_line_ants<R: Rng>(line: &mut AntLine, rng: &mut R, count: u32) {
    for _ in 0..count {
        let index = rng.random_range(0..line.width());
        let heading = LineHeading::ALL[rng.random_range(0..LineHeading::ALL.len())];
        line.set_cell(index, LineCell::with_ant(heading));
    }
}
