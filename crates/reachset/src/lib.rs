//! Reachable-set boundaries for planar linear systems `ẋ = Ax`.
//!
//! Pipeline
//! - `spectral`: closed-form eigen/Jordan decomposition and the matrix
//!   exponential `t ↦ exp(At)` for a real 2×2 matrix.
//! - `quad`: fixed-step quadrature used by the support integral.
//! - `reach`: support-function sampling over directions on [0, 2π) and
//!   dual→primal boundary reconstruction.
//!
//! Everything is a pure value transform; IO and rendering live in callers.
//! Matrices larger than 2×2 and complex spectra are rejected inputs, not
//! degraded ones.

pub mod quad;
pub mod reach;
pub mod spectral;
pub mod tol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Short aliases matching the planar-geometry notation used throughout.
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use tol::NumCfg;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::quad::{integrate, Boundaries, QuadError, QuadRule};
    pub use crate::reach::{
        control_support, reconstruct_boundary, FrameCfg, ReachError, ReachFrame, ReachSystem,
        SupportSample,
    };
    pub use crate::spectral::{
        eigen_pairs, eigenvalues, jordan_form, mat2_from_entries, spectrum, EigenPair,
        JordanDecomp, MatrixExp, SpectralError, Spectrum,
    };
    pub use crate::tol::NumCfg;
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
