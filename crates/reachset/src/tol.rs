//! Shared zero tolerance.
//!
//! Every "is this zero" decision in the crate (discriminant sign, rank and
//! row tests, transition and reconstruction determinants) goes through the
//! one predicate below, so a caller tightening or loosening `eps` affects
//! the whole pipeline consistently.

/// Numeric tolerance configuration.
#[derive(Clone, Copy, Debug)]
pub struct NumCfg {
    /// Absolute threshold under which a value counts as zero.
    pub eps: f64,
}

impl Default for NumCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

impl NumCfg {
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.eps
    }
}
