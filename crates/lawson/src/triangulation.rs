//! Triangulation driver: the three mutating entry points and read access for renderers.
//!
//! States
//! - Bounded: exactly the three bounding points and one non-drawable triangle
//!   (after construction or `reset`).
//! - Triangulated: application points inserted via `insert_point` or rebuilt via
//!   `triangulate`.
//!
//! Not thread-safe by construction (`&mut self` on every mutation); a shared
//! host must serialize calls behind one lock or one owner task.

use std::collections::BTreeSet;

use nalgebra::Vector2;
use thiserror::Error;

use crate::mesh::{Edge, FlipStats, Mesh, MeshCfg, SplitOutcome, Triangle, BOUNDING_POINTS};

/// Outcome of inserting one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Insertion {
    /// Fewer than three points stored; nothing meshed.
    Pending,
    /// Third point: the seed triangle was formed.
    Seeded,
    /// Point meshed and the neighbourhood legalized.
    Split(FlipStats),
    /// No triangle contains the point; it is stored but not meshed.
    Unmeshed { index: usize, point: Vector2<f64> },
}

impl Insertion {
    #[inline]
    pub fn is_meshed(&self) -> bool {
        !matches!(self, Insertion::Unmeshed { .. })
    }

    /// Strict view: an unmeshed point becomes an error.
    pub fn into_result(self) -> Result<Insertion, MeshError> {
        match self {
            Insertion::Unmeshed { index, point } => Err(MeshError::Unmeshed {
                index,
                x: point.x,
                y: point.y,
            }),
            other => Ok(other),
        }
    }
}

/// Recoverable conditions surfaced on request (see `insert_point_strict`).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("point {index} at ({x}, {y}) lies in no triangle; stored but not meshed")]
    Unmeshed { index: usize, x: f64, y: f64 },
}

/// Summary of a full rebuild.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rebuild {
    pub stats: FlipStats,
    /// Indices of points that found no containing triangle during replay.
    pub unmeshed: Vec<usize>,
}

/// Incremental Delaunay triangulation inside a fixed bounding triangle.
#[derive(Clone, Debug)]
pub struct Triangulation {
    mesh: Mesh,
    cfg: MeshCfg,
}

impl Default for Triangulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Triangulation {
    /// Bounded state with the default bounding triangle and tolerance.
    pub fn new() -> Self {
        Self::with_cfg(MeshCfg::default())
    }

    pub fn with_cfg(cfg: MeshCfg) -> Self {
        Self {
            mesh: Mesh::bounded(&cfg),
            cfg,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &MeshCfg {
        &self.cfg
    }

    /// Append `p`, split its containing triangle, and legalize.
    ///
    /// A point outside every triangle is kept in the store but not meshed;
    /// see `insert_point_strict` for an erroring variant.
    pub fn insert_point(&mut self, p: Vector2<f64>) -> Insertion {
        let index = self.mesh.points.push(p);
        self.mesh_point(index)
    }

    /// Like `insert_point`, but reports an unmeshed point as `MeshError::Unmeshed`.
    ///
    /// The point is stored either way.
    pub fn insert_point_strict(&mut self, p: Vector2<f64>) -> Result<Insertion, MeshError> {
        self.insert_point(p).into_result()
    }

    fn mesh_point(&mut self, index: usize) -> Insertion {
        match self.mesh.insert_point_into_triangle(self.cfg.bary_tol) {
            SplitOutcome::TooFew => Insertion::Pending,
            SplitOutcome::Seeded => Insertion::Seeded,
            SplitOutcome::Outside => {
                let point = self.mesh.points.get(index);
                tracing::warn!(index, x = point.x, y = point.y, "point outside mesh; left unmeshed");
                Insertion::Unmeshed { index, point }
            }
            SplitOutcome::Split(edges) => {
                let stats = self.mesh.legalize(&edges);
                tracing::debug!(
                    index,
                    flips = stats.flips,
                    examined = stats.examined,
                    max_stack = stats.max_stack,
                    triangles = self.mesh.tris.len(),
                    "inserted point"
                );
                Insertion::Split(stats)
            }
        }
    }

    /// Rebuild from scratch by replaying every stored point in order.
    ///
    /// No-op with fewer than three points. O(n²) worst case.
    pub fn triangulate(&mut self) -> Rebuild {
        let mut out = Rebuild::default();
        if self.mesh.points.len() < 3 {
            return out;
        }
        self.mesh.tris.clear();
        let old = self.mesh.points.take();
        self.mesh.points.reserve(old.len());
        for p in old {
            match self.insert_point(p) {
                Insertion::Split(stats) => out.stats.absorb(stats),
                Insertion::Unmeshed { index, .. } => out.unmeshed.push(index),
                Insertion::Pending | Insertion::Seeded => {}
            }
        }
        tracing::debug!(
            points = self.mesh.points.len(),
            triangles = self.mesh.tris.len(),
            flips = out.stats.flips,
            "rebuilt triangulation"
        );
        out
    }

    /// Drop every point and triangle and return to the bounded state.
    pub fn reset(&mut self) {
        self.mesh = Mesh::bounded(&self.cfg);
    }

    /// All stored points in index order, bounding points first.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        self.mesh.points.as_slice()
    }

    /// Points inserted by the application (everything after the bounding corners).
    #[inline]
    pub fn application_points(&self) -> &[Vector2<f64>] {
        let pts = self.points();
        &pts[BOUNDING_POINTS.min(pts.len())..]
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        self.mesh.tris.as_slice()
    }

    /// Triangles with a writable `drawable` flag.
    ///
    /// Positions are invalidated by the next mutating call, and so are the flags:
    /// splits and flips rebuild the triangles they touch, and `triangulate` and
    /// `reset` rebuild all of them, with `drawable` taken from the role again.
    #[inline]
    pub fn triangles_mut(&mut self) -> &mut [Triangle] {
        self.mesh.tris.as_mut_slice()
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.mesh.points.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.tris.len()
    }

    pub fn drawable_triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        self.triangles().iter().filter(|t| t.drawable)
    }

    /// Undirected edges of drawable triangles, each once, sorted by endpoint indices.
    pub fn drawable_edges(&self) -> Vec<Edge> {
        let keys: BTreeSet<(usize, usize)> = self
            .drawable_triangles()
            .flat_map(|t| t.edges())
            .map(Edge::key)
            .collect();
        keys.into_iter().map(|(a, b)| Edge(a, b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Role;
    use crate::validate::{delaunay_violations, manifold_violations};
    use nalgebra::vector;

    fn drawable_sorted(tri: &Triangulation) -> Vec<[usize; 3]> {
        let mut v: Vec<_> = tri.drawable_triangles().map(Triangle::sorted).collect();
        v.sort_unstable();
        v
    }

    fn assert_valid(tri: &Triangulation) {
        assert!(manifold_violations(tri.mesh()).is_empty());
        let bad = delaunay_violations(tri.mesh(), 1e-9);
        assert!(bad.is_empty(), "delaunay violations: {bad:?}");
    }

    #[test]
    fn reset_yields_bounding_state() {
        let mut tri = Triangulation::new();
        tri.insert_point(vector![300.0, 300.0]);
        tri.insert_point(vector![420.0, 350.0]);
        tri.reset();
        assert_eq!(
            tri.points(),
            &[
                vector![400.0, -1000.0],
                vector![-400.0, 700.0],
                vector![1200.0, 700.0]
            ]
        );
        assert_eq!(tri.triangle_count(), 1);
        assert!(!tri.triangles()[0].drawable);
        assert_eq!(tri.triangles()[0].role(), Role::Bounding);
    }

    #[test]
    fn first_triangle_is_not_drawable() {
        let tri = Triangulation::new();
        assert_eq!(tri.triangles().len(), 1);
        assert!(!tri.triangles()[0].drawable);
        assert_eq!(tri.drawable_triangles().count(), 0);
        assert!(tri.application_points().is_empty());
    }

    #[test]
    fn fourth_point_splits_drawable_triangle() {
        let mut tri = Triangulation::new();
        let corners = [
            vector![300.0, 300.0],
            vector![500.0, 300.0],
            vector![400.0, 450.0],
        ];
        for p in corners {
            assert!(matches!(tri.insert_point(p), Insertion::Split(_)));
        }
        assert_eq!(drawable_sorted(&tri), vec![[3, 4, 5]]);
        assert_valid(&tri);

        let inner = vector![400.0, 350.0];
        assert!(tri.insert_point(inner).is_meshed());
        let drawable = drawable_sorted(&tri);
        assert_eq!(drawable, vec![[3, 4, 6], [3, 5, 6], [4, 5, 6]]);
        for t in tri.drawable_triangles() {
            let [p1, p2, p3] = tri.mesh().corners(t);
            let c = crate::predicates::circumcircle(p1, p2, p3).unwrap();
            for (i, &q) in corners.iter().enumerate() {
                if !t.has_vertex(3 + i) {
                    assert!((q - c.center).norm_squared() > c.radius_sq);
                }
            }
        }
        assert_valid(&tri);
    }

    #[test]
    fn square_gets_a_delaunay_diagonal() {
        let mut tri = Triangulation::new();
        for p in [
            vector![300.0, 300.0],
            vector![500.0, 300.0],
            vector![500.0, 500.0],
            vector![300.0, 500.0],
        ] {
            tri.insert_point(p);
        }
        let drawable = drawable_sorted(&tri);
        assert_eq!(drawable.len(), 2);
        // Either diagonal (3-5 or 4-6) is acceptable; both halves must share it.
        let diag_35 = vec![[3, 4, 5], [3, 5, 6]];
        let diag_46 = vec![[3, 4, 6], [4, 5, 6]];
        assert!(drawable == diag_35 || drawable == diag_46, "{drawable:?}");
        assert_valid(&tri);
    }

    #[test]
    fn collinear_points_do_not_crash() {
        let mut tri = Triangulation::new();
        for p in [
            vector![200.0, 400.0],
            vector![600.0, 400.0],
            vector![400.0, 400.0],
        ] {
            tri.insert_point(p);
        }
        assert_eq!(tri.point_count(), 6);
        assert!(manifold_violations(tri.mesh()).is_empty());
        // Three collinear points span no drawable triangle.
        assert_eq!(tri.drawable_triangles().count(), 0);
        let [a, b, c] = [3, 4, 5].map(|i| tri.points()[i]);
        assert!(crate::predicates::circumcircle(a, b, c).is_none());
        assert!(crate::predicates::barycentric_coordinates([a, b, c], b, 1e-7).is_none());
    }

    #[test]
    fn outside_point_is_stored_but_unmeshed() {
        let mut tri = Triangulation::new();
        tri.insert_point(vector![400.0, 300.0]);
        let before = tri.triangles().to_vec();
        let res = tri.insert_point(vector![5000.0, 5000.0]);
        assert!(matches!(res, Insertion::Unmeshed { index: 4, .. }));
        assert_eq!(tri.point_count(), 5);
        assert_eq!(tri.triangles(), before.as_slice());

        let err = tri.insert_point_strict(vector![-5000.0, 0.0]).unwrap_err();
        assert!(matches!(err, MeshError::Unmeshed { index: 5, .. }));
        assert_eq!(tri.point_count(), 6);
    }

    #[test]
    fn triangulate_is_idempotent() {
        let mut tri = Triangulation::new();
        for p in crate::sample::demo_points() {
            tri.insert_point(p);
        }
        let incremental = drawable_sorted(&tri);
        let first = tri.triangulate();
        assert!(first.unmeshed.is_empty());
        let once = drawable_sorted(&tri);
        tri.triangulate();
        let twice = drawable_sorted(&tri);
        assert_eq!(once, twice);
        assert_eq!(once, incremental);
        assert_eq!(tri.point_count(), 13);
        assert_valid(&tri);
    }

    #[test]
    fn triangulate_bounded_state_keeps_one_triangle() {
        let mut tri = Triangulation::new();
        let rebuild = tri.triangulate();
        assert_eq!(rebuild, Rebuild::default());
        assert_eq!(tri.triangle_count(), 1);
        assert!(!tri.triangles()[0].drawable);
    }

    #[test]
    fn drawable_flag_is_writable_and_edges_follow_it() {
        let mut tri = Triangulation::new();
        for p in [
            vector![300.0, 300.0],
            vector![500.0, 300.0],
            vector![400.0, 450.0],
        ] {
            tri.insert_point(p);
        }
        assert_eq!(
            tri.drawable_edges(),
            vec![Edge(3, 4), Edge(3, 5), Edge(4, 5)]
        );
        for t in tri.triangles_mut() {
            t.drawable = false;
        }
        assert!(tri.drawable_edges().is_empty());

        // A split rebuilds the touched triangles with role-derived flags.
        tri.insert_point(vector![400.0, 350.0]);
        assert_eq!(drawable_sorted(&tri), vec![[3, 4, 6], [3, 5, 6], [4, 5, 6]]);
        tri.triangulate();
        assert!(tri
            .triangles()
            .iter()
            .all(|t| t.drawable == (t.role() == Role::Application)));
    }

    #[test]
    fn custom_cfg_survives_reset() {
        let cfg = MeshCfg {
            bary_tol: 1e-9,
            bounding: [vector![0.0, 0.0], vector![100.0, 0.0], vector![0.0, 100.0]],
        };
        let mut tri = Triangulation::with_cfg(cfg);
        tri.insert_point(vector![10.0, 10.0]);
        tri.reset();
        assert_eq!(tri.cfg(), &cfg);
        assert_eq!(tri.points(), &cfg.bounding);
    }
}
