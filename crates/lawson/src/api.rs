//! Curated surface for renderers and tooling.
//!
//! Everything a front end needs in one import: the driver, its result types,
//! validation and sampling helpers.

pub use crate::mesh::{Edge, FlipStats, MeshCfg, Role, Triangle, BOUNDING_POINTS};
pub use crate::predicates::{barycentric_coordinates, circumcircle, circumcircle_contains, Circle};
pub use crate::sample::{demo_points, uniform_in_triangle};
pub use crate::triangulation::{Insertion, MeshError, Rebuild, Triangulation};
pub use crate::validate::{delaunay_violations, manifold_violations, Violation};

use nalgebra::Vector2;

/// Segments `(from, to)` of every drawable triangle edge, each edge once.
pub fn drawable_segments(tri: &Triangulation) -> Vec<(Vector2<f64>, Vector2<f64>)> {
    let pts = tri.points();
    tri.drawable_edges()
        .into_iter()
        .map(|Edge(a, b)| (pts[a], pts[b]))
        .collect()
}

/// Property violations of the current mesh (manifold first, then Delaunay).
pub fn check(tri: &Triangulation, rel_eps: f64) -> Vec<Violation> {
    let mut out = manifold_violations(tri.mesh());
    out.extend(delaunay_violations(tri.mesh(), rel_eps));
    out
}
