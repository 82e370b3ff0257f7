//! Core engine shared across the AntLattice workspace.
//!
//! A lattice cell is a single packed byte holding one presence bit per ant
//! heading plus one color bit. Every update is expressed as a whole-array
//! transform: the complete next snapshot is computed from the prior snapshot
//! and only then committed, so no cell ever observes a neighbor that was
//! already updated within the same step. Each forward step has an exact
//! inverse, and composing the two restores the lattice bit for bit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cell;
pub mod entropy;
pub mod line;
pub mod plane;
pub mod sim;

pub use cell::{LineCell, LineHeading, PlaneCell, PlaneHeading};
pub use entropy::{binary_entropy, color_entropy};
pub use line::AntLine;
pub use plane::AntPlane;
pub use sim::{
    CycleHit, LineSimulation, PlaneSimulation, SimulationConfig, StepRecord, Trajectory,
    scatter_line_ants, scatter_plane_ants,
};

/// Errors that can occur when constructing lattices or simulations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LatticeError {
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// A cell buffer whose length does not match the declared shape.
    #[error("cell buffer of {len} bytes does not match a {width}x{height} lattice")]
    ShapeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
    /// A cell byte with bits set outside the defined layout.
    #[error("cell value {value:#04x} at index {index} has bits outside the cell layout")]
    MalformedCell { index: usize, value: u8 },
}

/// Direction a simulation step moves through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepDirection {
    Forward,
    Backward,
}

impl StepDirection {
    /// Lower-case label used in logs and CSV output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}
