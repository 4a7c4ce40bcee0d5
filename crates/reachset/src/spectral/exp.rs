//! Closed-form matrix exponential `t ↦ exp(At)`.

use nalgebra::Matrix2;

use super::eigen::Spectrum;
use super::jordan::jordan_form;
use super::SpectralError;
use crate::tol::NumCfg;

/// Matrix exponential of a real 2×2 matrix, valid for all real `t`.
///
/// Built once from the Jordan decomposition; evaluation is a handful of
/// flops on immutable data, so a value can be shared and called from any
/// number of threads.
///
/// Invariants:
/// - `at(0) = I`.
/// - `at(s + t) = at(s) · at(t)` within floating tolerance.
#[derive(Clone, Copy, Debug)]
pub struct MatrixExp {
    s: Matrix2<f64>,
    s_inv: Matrix2<f64>,
    spectrum: Spectrum,
}

impl MatrixExp {
    pub fn new(a: &Matrix2<f64>, cfg: NumCfg) -> Result<Self, SpectralError> {
        let dec = jordan_form(a, cfg)?;
        Ok(Self {
            s: dec.s,
            s_inv: dec.s_inv,
            spectrum: dec.spectrum,
        })
    }

    #[inline]
    pub fn spectrum(&self) -> Spectrum {
        self.spectrum
    }

    /// Evaluate `exp(At)`.
    pub fn at(&self, t: f64) -> Matrix2<f64> {
        match self.spectrum {
            Spectrum::Distinct { l1, l2 } => {
                let d = Matrix2::new((l1 * t).exp(), 0.0, 0.0, (l2 * t).exp());
                self.s * d * self.s_inv
            }
            Spectrum::Scalar { l } => Matrix2::identity() * (l * t).exp(),
            Spectrum::Defective { l } => {
                // exp of the Jordan block [[λ,1],[0,λ]] is e^{λt}·[[1,t],[0,1]].
                let block = Matrix2::new(1.0, t, 0.0, 1.0) * (l * t).exp();
                self.s * block * self.s_inv
            }
        }
    }
}
