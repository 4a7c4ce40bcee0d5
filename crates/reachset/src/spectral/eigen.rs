//! Eigenvalues and (generalized) eigenvectors of a real 2×2 matrix.

use nalgebra::{Matrix2, Vector2};

use super::SpectralError;
use crate::tol::NumCfg;

/// Classified real spectrum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spectrum {
    /// Two distinct real eigenvalues, ascending.
    Distinct { l1: f64, l2: f64 },
    /// Repeated eigenvalue with a full eigenspace (`A = λI`).
    Scalar { l: f64 },
    /// Repeated eigenvalue with a one-dimensional eigenspace.
    Defective { l: f64 },
}

/// One eigenvalue with its (possibly generalized) eigenvector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vector2<f64>,
}

/// Eigenvalues from the characteristic polynomial, ascending.
///
/// `Δ = tr² - 4·det`; a discriminant within `eps` of zero collapses to a
/// repeated real root, one below `-eps` is a rejected input.
pub fn eigenvalues(a: &Matrix2<f64>, cfg: NumCfg) -> Result<(f64, f64), SpectralError> {
    let tr = a[(0, 0)] + a[(1, 1)];
    let det = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
    let disc = tr * tr - 4.0 * det;
    if disc < -cfg.eps {
        return Err(SpectralError::ComplexEigenvalues { discriminant: disc });
    }
    let root = if cfg.is_zero(disc) { 0.0 } else { disc.sqrt() };
    Ok(((tr - root) * 0.5, (tr + root) * 0.5))
}

/// Classify the spectrum: distinct, scalar repeated, or defective repeated.
pub fn spectrum(a: &Matrix2<f64>, cfg: NumCfg) -> Result<Spectrum, SpectralError> {
    let (l1, l2) = eigenvalues(a, cfg)?;
    if !cfg.is_zero(l2 - l1) {
        return Ok(Spectrum::Distinct { l1, l2 });
    }
    let l = 0.5 * (l1 + l2);
    let m = a - Matrix2::identity() * l;
    if m.iter().all(|x| cfg.is_zero(*x)) {
        Ok(Spectrum::Scalar { l })
    } else {
        Ok(Spectrum::Defective { l })
    }
}

/// Eigenpairs ordered to match the transition-matrix columns.
///
/// The defective case pairs the eigenvector with a generalized eigenvector
/// `w` solving `(A - λI)w = v`, computed deterministically from the
/// non-zero row of `A - λI`.
pub fn eigen_pairs(a: &Matrix2<f64>, cfg: NumCfg) -> Result<[EigenPair; 2], SpectralError> {
    match spectrum(a, cfg)? {
        Spectrum::Distinct { l1, l2 } => {
            let v1 = null_vector(&(a - Matrix2::identity() * l1), cfg)
                .ok_or(SpectralError::SingularTransition { det: 0.0 })?;
            let v2 = null_vector(&(a - Matrix2::identity() * l2), cfg)
                .ok_or(SpectralError::SingularTransition { det: 0.0 })?;
            Ok([
                EigenPair { value: l1, vector: v1 },
                EigenPair { value: l2, vector: v2 },
            ])
        }
        Spectrum::Scalar { l } => Ok([
            EigenPair { value: l, vector: Vector2::x() },
            EigenPair { value: l, vector: Vector2::y() },
        ]),
        Spectrum::Defective { l } => {
            let m = a - Matrix2::identity() * l;
            let v = null_vector(&m, cfg)
                .ok_or(SpectralError::SingularTransition { det: 0.0 })?;
            let w = generalized_vector(&m, v, cfg)
                .ok_or(SpectralError::SingularTransition { det: 0.0 })?;
            Ok([
                EigenPair { value: l, vector: v },
                EigenPair { value: l, vector: w },
            ])
        }
    }
}

/// Unit null vector of a rank-1 matrix, from its first non-near-zero row
/// (row 0 preferred). Both rows of a rank-1 matrix are parallel, so one
/// row determines the kernel.
fn null_vector(m: &Matrix2<f64>, cfg: NumCfg) -> Option<Vector2<f64>> {
    let r = nonzero_row(m, cfg)?.0;
    Some(Vector2::new(r.y, -r.x).normalize())
}

/// Solve `m·w = v` for rank-1 `m` through the dominant coefficient of its
/// non-zero row. The two equations of the system are dependent here:
/// `m² = 0` for a defective block, so `v ∈ range(m)` and one row decides.
fn generalized_vector(m: &Matrix2<f64>, v: Vector2<f64>, cfg: NumCfg) -> Option<Vector2<f64>> {
    let (r, row) = nonzero_row(m, cfg)?;
    let rhs = if row == 0 { v.x } else { v.y };
    if r.x.abs() >= r.y.abs() {
        Some(Vector2::new(rhs / r.x, 0.0))
    } else {
        Some(Vector2::new(0.0, rhs / r.y))
    }
}

fn nonzero_row(m: &Matrix2<f64>, cfg: NumCfg) -> Option<(Vector2<f64>, usize)> {
    let r0 = Vector2::new(m[(0, 0)], m[(0, 1)]);
    if !cfg.is_zero(r0.norm()) {
        return Some((r0, 0));
    }
    let r1 = Vector2::new(m[(1, 0)], m[(1, 1)]);
    if !cfg.is_zero(r1.norm()) {
        return Some((r1, 1));
    }
    None
}
