//! Floating-point geometric predicates used by the mesh.
//!
//! - `circumcircle`, `circumcircle_contains`: empty-circle test driving the flips.
//! - `barycentric_coordinates`: tolerant point-in-triangle test used by the locator.
//!
//! Plain `f64` arithmetic throughout. Near-collinear input yields unreliable
//! answers; exactly collinear input is reported as "no circle" / "no coordinates".

use nalgebra::Vector2;

/// Default tolerance for `barycentric_coordinates`; absorbs rounding on shared edges.
pub const BARY_TOL: f64 = 1e-7;

/// Circle through three points: center and squared radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius_sq: f64,
}

impl Circle {
    /// Inside or on the boundary (`<=`).
    #[inline]
    pub fn contains(&self, v: Vector2<f64>) -> bool {
        (v - self.center).norm_squared() <= self.radius_sq
    }
}

/// Circumcircle of `(p1, p2, p3)` from the determinant formulas.
///
/// Returns `None` when either denominator is exactly zero or the result is not
/// finite (collinear or coincident input).
pub fn circumcircle(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Option<Circle> {
    let ab = p1.norm_squared();
    let cd = p2.norm_squared();
    let ef = p3.norm_squared();

    let den_x = p1.x * (p3.y - p2.y) + p2.x * (p1.y - p3.y) + p3.x * (p2.y - p1.y);
    let den_y = p1.y * (p3.x - p2.x) + p2.y * (p1.x - p3.x) + p3.y * (p2.x - p1.x);
    if den_x == 0.0 || den_y == 0.0 {
        return None;
    }
    let cx = (ab * (p3.y - p2.y) + cd * (p1.y - p3.y) + ef * (p2.y - p1.y)) / den_x;
    let cy = (ab * (p3.x - p2.x) + cd * (p1.x - p3.x) + ef * (p2.x - p1.x)) / den_y;
    let center = Vector2::new(0.5 * cx, 0.5 * cy);
    let radius_sq = (p1 - center).norm_squared();
    if !(center.x.is_finite() && center.y.is_finite() && radius_sq.is_finite()) {
        return None;
    }
    Some(Circle { center, radius_sq })
}

/// Is `v` inside or on the circumcircle of `(p1, p2, p3)`?
///
/// A collinear triple has no finite circumcircle and contains nothing, so an
/// edge whose first owner is a zero-area sliver is treated as legal. Flipping
/// a sliver against its neighbour would replace a triangle with two
/// overlapping ones.
#[inline]
pub fn circumcircle_contains(
    v: Vector2<f64>,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
) -> bool {
    circumcircle(p1, p2, p3).is_some_and(|c| c.contains(v))
}

/// Barycentric coordinates `(u, v, w)` of `p` in triangle `(a, b, c)` if `p` lies
/// inside it up to `tol`.
///
/// `None` for a degenerate triangle (zero denominator) or when `v`, `w` fall outside
/// `[-tol, 1 + tol]` or `v + w > 1 + tol`.
pub fn barycentric_coordinates(
    [a, b, c]: [Vector2<f64>; 3],
    p: Vector2<f64>,
    tol: f64,
) -> Option<[f64; 3]> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);
    let den = d00 * d11 - d01 * d01;
    if den == 0.0 {
        return None;
    }

    let inv = 1.0 / den;
    let v = (d11 * d20 - d01 * d21) * inv;
    let w = (d00 * d21 - d01 * d20) * inv;
    if v.min(w) >= -tol && v.max(w) <= 1.0 + tol && v + w <= 1.0 + tol {
        Some([1.0 - v - w, v, w])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn circumcircle_of_right_triangle() {
        let c = circumcircle(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]).unwrap();
        assert!((c.center - vector![1.0, 1.0]).norm() < 1e-12);
        assert!((c.radius_sq - 2.0).abs() < 1e-12);
    }

    #[test]
    fn circumcircle_contains_inside_boundary_outside() {
        let (p1, p2, p3) = (vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
        assert!(circumcircle_contains(vector![1.0, 1.0], p1, p2, p3));
        // (2,2) is on the circle: boundary counts as inside.
        assert!(circumcircle_contains(vector![2.0, 2.0], p1, p2, p3));
        assert!(!circumcircle_contains(vector![3.0, 3.0], p1, p2, p3));
    }

    #[test]
    fn collinear_has_no_circumcircle() {
        let (p1, p2, p3) = (vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
        assert!(circumcircle(p1, p2, p3).is_none());
        assert!(!circumcircle_contains(vector![5.0, -3.0], p1, p2, p3));
        assert!(!circumcircle_contains(vector![1.0, 1.0], p1, p2, p3));
        assert!(circumcircle(p1, p1, p3).is_none());
    }

    #[test]
    fn barycentric_inside_and_outside() {
        let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]];
        let [u, v, w] = barycentric_coordinates(tri, vector![1.0, 1.0], BARY_TOL).unwrap();
        assert!((u - 0.5).abs() < 1e-12);
        assert!((v - 0.25).abs() < 1e-12);
        assert!((w - 0.25).abs() < 1e-12);
        assert!(barycentric_coordinates(tri, vector![3.0, 3.0], BARY_TOL).is_none());
        assert!(barycentric_coordinates(tri, vector![-0.5, 1.0], BARY_TOL).is_none());
    }

    #[test]
    fn barycentric_accepts_edges_and_vertices() {
        let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]];
        assert!(barycentric_coordinates(tri, vector![2.0, 0.0], BARY_TOL).is_some());
        assert!(barycentric_coordinates(tri, vector![2.0, 2.0], BARY_TOL).is_some());
        assert!(barycentric_coordinates(tri, vector![0.0, 4.0], BARY_TOL).is_some());
        // tolerance is absolute in (v, w) space
        assert!(barycentric_coordinates(tri, vector![2.0, -1e-9], BARY_TOL).is_some());
        assert!(barycentric_coordinates(tri, vector![2.0, -1e-3], BARY_TOL).is_none());
    }

    #[test]
    fn barycentric_rejects_degenerate_triangle() {
        let tri = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(barycentric_coordinates(tri, vector![1.0, 1.0], BARY_TOL).is_none());
    }

    #[test]
    fn barycentric_weights_reconstruct_point_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let tri = [vector![-3.0, -1.0], vector![5.0, 0.5], vector![1.0, 6.0]];
        for _ in 0..200 {
            let p = vector![rng.gen_range(-4.0..6.0), rng.gen_range(-2.0..7.0)];
            if let Some([u, v, w]) = barycentric_coordinates(tri, p, BARY_TOL) {
                let q = tri[0] * u + tri[1] * v + tri[2] * w;
                assert!((q - p).norm() < 1e-9);
                assert!((u + v + w - 1.0).abs() < 1e-12);
            }
        }
    }
}
