//! Point sets: seeded uniform samples inside a triangle and the built-in demo set.
//!
//! Determinism: the same `(corners, n, seed)` always yields the same points.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Samples are pulled this fraction of the way toward the centroid, keeping
/// them clear of the triangle's edges.
const MARGIN: f64 = 0.02;

/// `n` points uniformly distributed in the triangle `corners`, strictly inside it.
pub fn uniform_in_triangle(corners: [Vector2<f64>; 3], n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let [a, b, c] = corners;
    let centroid = (a + b + c) / 3.0;
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let s = rng.gen::<f64>().sqrt();
            let t = rng.gen::<f64>();
            let p = a * (1.0 - s) + b * (s * (1.0 - t)) + c * (s * t);
            p + (centroid - p) * MARGIN
        })
        .collect()
}

/// Ten sample points the interactive viewer starts from.
pub fn demo_points() -> Vec<Vector2<f64>> {
    [
        (361.0, 179.0),
        (291.0, 251.0),
        (413.0, 264.0),
        (240.0, 158.0),
        (172.0, 247.0),
        (332.0, 337.0),
        (483.0, 353.0),
        (411.0, 419.0),
        (259.0, 381.0),
        (507.0, 160.0),
    ]
    .into_iter()
    .map(|(x, y)| Vector2::new(x, y))
    .collect()
}
