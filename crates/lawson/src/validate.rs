//! Whole-mesh checks for the manifold and empty-circumcircle properties.
//!
//! Both checks are O(n·t) or better and meant for tests and diagnostics, not
//! for the insertion path.

use std::collections::HashMap;

use thiserror::Error;

use crate::mesh::Mesh;
use crate::predicates::circumcircle;

/// A property violation found in a mesh.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("edge ({}, {}) is owned by {owners} triangles", .edge.0, .edge.1)]
    Manifold { edge: (usize, usize), owners: usize },
    #[error("triangle {tri} repeats a vertex: {vertices:?}")]
    RepeatedVertex { tri: usize, vertices: [usize; 3] },
    #[error("point {point} lies strictly inside the circumcircle of triangle {tri} {vertices:?}")]
    Delaunay {
        tri: usize,
        vertices: [usize; 3],
        point: usize,
    },
}

/// Edges owned by more than two triangles, and triangles with repeated vertices.
pub fn manifold_violations(mesh: &Mesh) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut owners: HashMap<(usize, usize), usize> = HashMap::new();
    for (i, t) in mesh.tris.iter().enumerate() {
        let [a, b, c] = t.vertices();
        if a == b || b == c || a == c {
            out.push(Violation::RepeatedVertex {
                tri: i,
                vertices: t.vertices(),
            });
            continue;
        }
        for e in t.edges() {
            *owners.entry(e.key()).or_default() += 1;
        }
    }
    let mut crowded: Vec<_> = owners.into_iter().filter(|&(_, n)| n > 2).collect();
    crowded.sort_unstable();
    out.extend(
        crowded
            .into_iter()
            .map(|(edge, owners)| Violation::Manifold { edge, owners }),
    );
    out
}

/// Meshed points lying strictly inside some triangle's circumcircle.
///
/// "Strictly" means `dist² < r² · (1 - rel_eps)`; pass a small `rel_eps` to
/// absorb rounding on cocircular input. Degenerate triangles are skipped and
/// points no triangle references are ignored.
pub fn delaunay_violations(mesh: &Mesh, rel_eps: f64) -> Vec<Violation> {
    let mut meshed = vec![false; mesh.points.len()];
    for t in mesh.tris.iter() {
        for v in t.vertices() {
            meshed[v] = true;
        }
    }
    let mut out = Vec::new();
    for (i, t) in mesh.tris.iter().enumerate() {
        let [p1, p2, p3] = mesh.corners(t);
        let Some(c) = circumcircle(p1, p2, p3) else {
            continue;
        };
        let limit = c.radius_sq * (1.0 - rel_eps);
        for (pi, &is_meshed) in meshed.iter().enumerate() {
            if !is_meshed || t.has_vertex(pi) {
                continue;
            }
            if (mesh.points.get(pi) - c.center).norm_squared() < limit {
                out.push(Violation::Delaunay {
                    tri: i,
                    vertices: t.vertices(),
                    point: pi,
                });
            }
        }
    }
    out
}
