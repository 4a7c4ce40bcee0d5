//! Support-function evaluation of the reachable set.

use nalgebra::{Matrix2, Vector2};

use super::ReachError;
use crate::quad::{integrate, Boundaries, QuadRule};
use crate::spectral::{MatrixExp, SpectralError};
use crate::tol::NumCfg;

/// Support function of the admissible-control set.
///
/// Piecewise closed form, total on R². The quadratic branch keeps
/// `p2 < 0`, so the division is safe; the value is nonnegative and
/// positively homogeneous.
pub fn control_support(psi: Vector2<f64>) -> f64 {
    let (p1, p2) = (psi.x, psi.y);
    if p1 >= 0.0 && p2 >= -0.5 * p1 {
        p1 + p2
    } else if p1 < 0.0 && p2 >= 0.5 * p1 {
        -p1 + p2
    } else {
        -p1 * p1 / (4.0 * p2)
    }
}

/// One supporting line `⟨x, dir⟩ ≤ value` of the reachable set.
#[derive(Clone, Copy, Debug)]
pub struct SupportSample {
    pub dir: Vector2<f64>,
    pub value: f64,
}

/// Angle-ordered support samples of the reachable set at one time instant.
#[derive(Clone, Debug)]
pub struct ReachFrame {
    pub t: f64,
    pub samples: Vec<SupportSample>,
}

/// Shape of one frame evaluation.
///
/// Direction count and quadrature subdivisions are independent knobs; both
/// must be at least one.
#[derive(Clone, Copy, Debug)]
pub struct FrameCfg {
    /// Sampled directions per frame, equally spaced on [0, 2π).
    pub directions: usize,
    /// Quadrature subdivisions for the support integral.
    pub subdivisions: usize,
    pub rule: QuadRule,
}

impl Default for FrameCfg {
    fn default() -> Self {
        Self {
            directions: 128,
            subdivisions: 128,
            rule: QuadRule::Rectangle,
        }
    }
}

/// Reachable-set pipeline for `ẋ = Ax` started at `x0` at time `t0`.
///
/// The matrix exponential is decomposed once at construction; every frame
/// afterwards is pure arithmetic over that value.
#[derive(Clone, Debug)]
pub struct ReachSystem {
    exp: MatrixExp,
    x0: Vector2<f64>,
    t0: f64,
    cfg: NumCfg,
}

impl ReachSystem {
    pub fn new(
        a: &Matrix2<f64>,
        x0: Vector2<f64>,
        t0: f64,
        cfg: NumCfg,
    ) -> Result<Self, SpectralError> {
        Ok(Self {
            exp: MatrixExp::new(a, cfg)?,
            x0,
            t0,
            cfg,
        })
    }

    #[inline]
    pub fn exp(&self) -> &MatrixExp {
        &self.exp
    }

    /// Support value `c(t, ψ)` of the reachable set at time `t`:
    /// `⟨exp(A(t-t0))·x0, ψ⟩ + ∫_{t0}^t ρ(exp(A(t-s))ᵀ·ψ) ds`.
    pub fn support(&self, t: f64, psi: Vector2<f64>, quad: Boundaries, rule: QuadRule) -> f64 {
        let drift = (self.exp.at(t - self.t0) * self.x0).dot(&psi);
        let control = integrate(
            |s| control_support(self.exp.at(t - s).transpose() * psi),
            quad,
            rule,
        );
        drift + control
    }

    /// Sample the full dual description of the reachable set at `t`.
    pub fn frame(&self, t: f64, fcfg: FrameCfg) -> Result<ReachFrame, ReachError> {
        if fcfg.directions == 0 {
            return Err(ReachError::InvalidSubdivision { n: 0 });
        }
        let quad = Boundaries::new(self.t0, t, fcfg.subdivisions)?;
        let dtheta = 2.0 * std::f64::consts::PI / fcfg.directions as f64;
        let mut samples = Vec::with_capacity(fcfg.directions);
        for i in 0..fcfg.directions {
            let theta = i as f64 * dtheta;
            let dir = Vector2::new(theta.cos(), theta.sin());
            let value = self.support(t, dir, quad, fcfg.rule);
            samples.push(SupportSample { dir, value });
        }
        Ok(ReachFrame { t, samples })
    }

    /// Boundary polygon of the reachable set at `t`, in direction order.
    pub fn boundary(&self, t: f64, fcfg: FrameCfg) -> Result<Vec<Vector2<f64>>, ReachError> {
        let frame = self.frame(t, fcfg)?;
        super::boundary::reconstruct_boundary(&frame, self.cfg)
    }
}
