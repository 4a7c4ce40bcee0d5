//! Closed-form spectral pipeline for real 2×2 matrices.
//!
//! Purpose
//! - Eigenvalues from trace and determinant, eigenvectors (generalized ones
//!   included) from the rows of `A - λI`, the Jordan form `J = S⁻¹AS`, and
//!   the matrix exponential built from that decomposition.
//!
//! Why closed-form
//! - At fixed dimension two, every case (distinct, scalar repeated,
//!   defective repeated) has an explicit formula. Nothing iterates and
//!   nothing samples, so repeated calls are bitwise identical.

mod eigen;
mod exp;
mod jordan;

pub use eigen::{eigen_pairs, eigenvalues, spectrum, EigenPair, Spectrum};
pub use exp::MatrixExp;
pub use jordan::{jordan_form, JordanDecomp};

use std::fmt;

use nalgebra::Matrix2;

/// Errors shared by the spectral pipeline.
#[derive(Debug)]
pub enum SpectralError {
    /// Entry count does not describe a 2×2 matrix.
    UnsupportedDimension { len: usize },
    /// Negative characteristic discriminant beyond tolerance.
    ComplexEigenvalues { discriminant: f64 },
    /// The eigenbasis failed to be invertible. Signals an internal defect:
    /// a real-diagonalizable-or-defective 2×2 matrix always has one.
    SingularTransition { det: f64 },
}

impl fmt::Display for SpectralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectralError::UnsupportedDimension { len } => {
                write!(f, "expected 4 matrix entries for a 2x2 system (got {len})")
            }
            SpectralError::ComplexEigenvalues { discriminant } => write!(
                f,
                "complex eigenvalue pair (discriminant {discriminant:.3e}); oscillatory dynamics are unsupported"
            ),
            SpectralError::SingularTransition { det } => {
                write!(f, "transition matrix is singular (det {det:.3e})")
            }
        }
    }
}

impl std::error::Error for SpectralError {}

/// Build a 2×2 matrix from a row-major entry slice.
pub fn mat2_from_entries(entries: &[f64]) -> Result<Matrix2<f64>, SpectralError> {
    match entries {
        [a, b, c, d] => Ok(Matrix2::new(*a, *b, *c, *d)),
        _ => Err(SpectralError::UnsupportedDimension {
            len: entries.len(),
        }),
    }
}
