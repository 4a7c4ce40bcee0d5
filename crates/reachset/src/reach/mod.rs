//! Reachable-set support sampling and boundary reconstruction.
//!
//! Purpose
//! - Evaluate the support function of the reachable set of `ẋ = Ax` over
//!   equally spaced directions on [0, 2π), then intersect consecutive
//!   supporting lines to recover the boundary polygon.
//!
//! Why dual-first
//! - The support value in a fixed direction has a closed integral form in
//!   the matrix exponential, so the dual description is cheap per direction
//!   and the primal polygon falls out of pairwise 2×2 solves.

mod boundary;
mod support;

pub use boundary::reconstruct_boundary;
pub use support::{control_support, FrameCfg, ReachFrame, ReachSystem, SupportSample};

use std::fmt;

use crate::quad::QuadError;

/// Errors shared by the reachable-set pipeline.
#[derive(Debug)]
pub enum ReachError {
    /// Sampling or integration count of zero.
    InvalidSubdivision { n: usize },
    /// Two consecutive sampled directions are parallel, so their supporting
    /// lines meet in no single vertex.
    DegenerateDirections { index: usize },
}

impl fmt::Display for ReachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReachError::InvalidSubdivision { n } => {
                write!(f, "subdivision count must be positive (got {n})")
            }
            ReachError::DegenerateDirections { index } => {
                write!(f, "sampled direction {index} is parallel to its successor")
            }
        }
    }
}

impl std::error::Error for ReachError {}

impl From<QuadError> for ReachError {
    fn from(e: QuadError) -> Self {
        match e {
            QuadError::InvalidSubdivision { n } => ReachError::InvalidSubdivision { n },
        }
    }
}
