//! Dual→primal reconstruction of the boundary polygon.

use nalgebra::Vector2;

use super::support::ReachFrame;
use super::ReachError;
use crate::tol::NumCfg;

/// Recover boundary vertices from angle-ordered support samples.
///
/// Each consecutive pair of supporting lines meets in one vertex (the pair
/// `(last, first)` closes the polygon), solved by Cramer's rule. Output
/// keeps the angular order of the input, so vertex `i` lies on the lines of
/// samples `i` and `i+1`.
pub fn reconstruct_boundary(
    frame: &ReachFrame,
    cfg: NumCfg,
) -> Result<Vec<Vector2<f64>>, ReachError> {
    let m = frame.samples.len();
    let mut vertices = Vec::with_capacity(m);
    for i in 0..m {
        let a = frame.samples[i];
        let b = frame.samples[(i + 1) % m];
        let det = a.dir.x * b.dir.y - a.dir.y * b.dir.x;
        if cfg.is_zero(det) {
            return Err(ReachError::DegenerateDirections { index: i });
        }
        let x = (a.value * b.dir.y - a.dir.y * b.value) / det;
        let y = (a.dir.x * b.value - a.value * b.dir.x) / det;
        vertices.push(Vector2::new(x, y));
    }
    Ok(vertices)
}
