//! Edge adjacency: which triangles own a given undirected edge.

use super::store::Mesh;
use super::types::Edge;

/// One triangle owning an edge, with the local positions of the edge's endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeOwner {
    /// Position in the triangle mesh.
    pub tri: usize,
    /// Local position (0..3) of `edge.0`.
    pub first: usize,
    /// Local position (0..3) of `edge.1`.
    pub second: usize,
}

impl EdgeOwner {
    /// Local position of the vertex opposite the edge.
    #[inline]
    pub fn opposite(&self) -> usize {
        3 - self.first - self.second
    }
}

impl Mesh {
    /// Every triangle containing both endpoints of `e`, in mesh order. Unchecked.
    pub fn edge_owners(&self, e: Edge) -> Vec<EdgeOwner> {
        let mut out = Vec::with_capacity(2);
        for (i, t) in self.tris.iter().enumerate() {
            if let (Some(first), Some(second)) = (t.position_of(e.0), t.position_of(e.1)) {
                out.push(EdgeOwner {
                    tri: i,
                    first,
                    second,
                });
            }
        }
        out
    }

    /// Owners of an edge that must exist in the mesh: one (hull) or two (interior).
    ///
    /// Panics otherwise; zero or more than two owners means the mesh is corrupt.
    pub fn triangles_sharing_edge(&self, e: Edge) -> Vec<EdgeOwner> {
        let owners = self.edge_owners(e);
        if owners.is_empty() || owners.len() > 2 {
            panic!(
                "edge ({}, {}) has {} owning triangles (expected 1 or 2; mesh holds {} triangles)",
                e.0,
                e.1,
                owners.len(),
                self.tris.len()
            );
        }
        owners
    }
}
