//! Point location by linear scan.

use nalgebra::Vector2;

use super::store::Mesh;
use crate::predicates::barycentric_coordinates;

impl Mesh {
    /// Position of the first triangle whose barycentric test accepts `p`.
    ///
    /// O(triangle count). On a shared edge the earlier triangle wins.
    pub fn find_triangle_containing(&self, p: Vector2<f64>, tol: f64) -> Option<usize> {
        self.tris
            .iter()
            .position(|t| barycentric_coordinates(self.corners(t), p, tol).is_some())
    }
}
