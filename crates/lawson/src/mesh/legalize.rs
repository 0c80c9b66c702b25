//! Lawson flip legalization driven by an explicit LIFO work stack.
//!
//! Each popped edge is looked up again (triangle positions shift with every
//! flip). An interior edge whose neighbouring apex lies in the circumcircle of
//! the first owner is replaced by the other diagonal of the quadrilateral, and
//! the four quadrilateral sides are pushed for re-examination.

use super::store::Mesh;
use super::types::{Edge, Triangle};
use crate::predicates::circumcircle_contains;

/// Counters from one legalization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipStats {
    /// Edges popped from the stack.
    pub examined: usize,
    /// Diagonal swaps performed.
    pub flips: usize,
    /// Popped edges owned by a single triangle.
    pub hull_edges: usize,
    /// Largest stack length observed.
    pub max_stack: usize,
}

impl FlipStats {
    /// Accumulate another pass.
    pub fn absorb(&mut self, other: FlipStats) {
        self.examined += other.examined;
        self.flips += other.flips;
        self.hull_edges += other.hull_edges;
        self.max_stack = self.max_stack.max(other.max_stack);
    }
}

/// Result of examining one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeCheck {
    Hull,
    Legal,
    Flipped([Edge; 4]),
}

impl Mesh {
    /// Restore the empty-circumcircle property starting from `candidates`.
    ///
    /// Every candidate must be an edge of the mesh. Termination relies on
    /// well-conditioned input; near-degenerate configurations are not guarded.
    pub fn legalize(&mut self, candidates: &[Edge]) -> FlipStats {
        let mut stack: Vec<Edge> = candidates.to_vec();
        let mut stats = FlipStats {
            max_stack: stack.len(),
            ..FlipStats::default()
        };
        while let Some(e) = stack.pop() {
            stats.examined += 1;
            match self.flip_if_illegal(e) {
                EdgeCheck::Hull => stats.hull_edges += 1,
                EdgeCheck::Legal => {}
                EdgeCheck::Flipped(sides) => {
                    stats.flips += 1;
                    stack.extend(sides);
                    stats.max_stack = stats.max_stack.max(stack.len());
                }
            }
        }
        stats
    }

    fn flip_if_illegal(&mut self, e: Edge) -> EdgeCheck {
        let owners = self.triangles_sharing_edge(e);
        let [cur, nb] = match owners.as_slice() {
            [_] => {
                tracing::trace!(v1 = e.0, v2 = e.1, "hull edge");
                return EdgeCheck::Hull;
            }
            [cur, nb] => [*cur, *nb],
            _ => unreachable!("triangles_sharing_edge returns one or two owners"),
        };
        let t = *self.tris.get(cur.tri);
        let n = *self.tris.get(nb.tri);
        let (v1, v2) = (e.0, e.1);
        let a = t.vertices()[cur.opposite()];
        let d = n.vertices()[nb.opposite()];

        let [p1, p2, p3] = self.corners(&t);
        if !circumcircle_contains(self.points.get(d), p1, p2, p3) {
            tracing::trace!(v1, v2, "legal edge");
            return EdgeCheck::Legal;
        }

        // Remove the later position first so the earlier one stays valid.
        let (hi, lo) = if cur.tri > nb.tri {
            (cur.tri, nb.tri)
        } else {
            (nb.tri, cur.tri)
        };
        self.tris.remove(hi);
        self.tris.remove(lo);
        self.tris.push(Triangle::new(a, v1, d));
        self.tris.push(Triangle::new(a, d, v2));
        tracing::debug!(v1, v2, a, d, "flipped edge");
        EdgeCheck::Flipped([Edge(a, v1), Edge(v1, d), Edge(d, v2), Edge(v2, a)])
    }
}
