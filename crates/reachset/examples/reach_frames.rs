//! Frame-sweep timing probe for one planar system.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does one boundary
//!   frame take at plotting resolution?" and show the extents growing with
//!   the time horizon.

use std::time::Instant;

use nalgebra::{matrix, vector};
use reachset::prelude::*;

fn main() {
    let a = matrix![1.0, -3.0; -2.0, 2.0];
    let sys = ReachSystem::new(&a, vector![1.0, 1.0], 0.0, NumCfg::default())
        .expect("real spectrum");
    let fcfg = FrameCfg {
        directions: 256,
        subdivisions: 256,
        rule: QuadRule::Trapezoid,
    };

    for i in 1..=6 {
        let t = 0.1 * i as f64;
        let start = Instant::now();
        let boundary = sys.boundary(t, fcfg).expect("boundary frame");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        let mut radius: f64 = 0.0;
        for v in &boundary {
            radius = radius.max(v.norm());
        }
        println!(
            "t={t:.2} points={} outradius={radius:.6} frame_time_ms={elapsed_ms:.3}",
            boundary.len()
        );
    }
}
