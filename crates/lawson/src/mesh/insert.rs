//! Incremental insertion: split the triangle containing the newest point into three.

use super::store::Mesh;
use super::types::{Edge, Triangle};

/// What splitting did with the newest point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitOutcome {
    /// Fewer than three points stored; nothing to form.
    TooFew,
    /// Exactly three points: the seed triangle `(0, 1, 2)` was formed.
    Seeded,
    /// No triangle contains the point; it stays in the store, unmeshed.
    Outside,
    /// Containing triangle replaced by three; its former edges need legalizing.
    Split([Edge; 3]),
}

impl SplitOutcome {
    /// Edges to hand to the legalizer, if any.
    #[inline]
    pub fn edges(&self) -> Option<[Edge; 3]> {
        match *self {
            SplitOutcome::Split(edges) => Some(edges),
            _ => None,
        }
    }
}

impl Mesh {
    /// Mesh the last point of the store.
    ///
    /// The point must already be appended. Triangle positions held by the caller
    /// are invalid afterwards.
    pub fn insert_point_into_triangle(&mut self, tol: f64) -> SplitOutcome {
        let n = self.points.len();
        if n < 3 {
            return SplitOutcome::TooFew;
        }
        if n == 3 {
            self.tris.push(Triangle::new(0, 1, 2));
            return SplitOutcome::Seeded;
        }
        let p = n - 1;
        let Some(ti) = self.find_triangle_containing(self.points.get(p), tol) else {
            return SplitOutcome::Outside;
        };
        let before = self.tris.len();
        let [v0, v1, v2] = self.tris.remove(ti).vertices();
        self.tris.push(Triangle::new(v0, v1, p));
        self.tris.push(Triangle::new(p, v1, v2));
        self.tris.push(Triangle::new(v0, p, v2));
        debug_assert_eq!(before + 2, self.tris.len());
        SplitOutcome::Split([Edge(v0, v1), Edge(v1, v2), Edge(v0, v2)])
    }
}
