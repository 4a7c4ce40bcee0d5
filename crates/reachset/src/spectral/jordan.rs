//! Jordan normal form via the eigenbasis transition matrix.

use nalgebra::Matrix2;

use super::eigen::{self, eigen_pairs, Spectrum};
use super::SpectralError;
use crate::tol::NumCfg;

/// Jordan decomposition `A = S·J·S⁻¹` of a real 2×2 matrix.
///
/// `J` is diagonal for distinct or scalar-repeated spectra and the
/// upper-triangular Jordan block `[[λ, 1], [0, λ]]` for a defective one.
#[derive(Clone, Copy, Debug)]
pub struct JordanDecomp {
    pub s: Matrix2<f64>,
    pub s_inv: Matrix2<f64>,
    pub j: Matrix2<f64>,
    pub spectrum: Spectrum,
}

/// Build the transition matrix from the eigenpairs and conjugate.
pub fn jordan_form(a: &Matrix2<f64>, cfg: NumCfg) -> Result<JordanDecomp, SpectralError> {
    let pairs = eigen_pairs(a, cfg)?;
    let s = Matrix2::from_columns(&[pairs[0].vector, pairs[1].vector]);
    let det = s.determinant();
    if cfg.is_zero(det) {
        return Err(SpectralError::SingularTransition { det });
    }
    // Closed-form adjugate inverse.
    let s_inv = Matrix2::new(s[(1, 1)], -s[(0, 1)], -s[(1, 0)], s[(0, 0)]) / det;
    let j = s_inv * a * s;
    Ok(JordanDecomp {
        s,
        s_inv,
        j,
        spectrum: eigen::spectrum(a, cfg)?,
    })
}
