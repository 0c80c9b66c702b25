//! Basic mesh types and configuration.
//!
//! - `MeshCfg`: barycentric tolerance and bounding triangle corners.
//! - `Edge`: undirected vertex pair, used only as a lookup key.
//! - `Triangle`: three point indices plus the `drawable` flag and its `Role`.

use nalgebra::Vector2;

use crate::predicates::BARY_TOL;

/// Number of bounding points at the front of every point store.
pub const BOUNDING_POINTS: usize = 3;

/// Mesh configuration (tolerance and bounding triangle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCfg {
    pub bary_tol: f64,
    /// Corners of the bounding triangle; every inserted point must lie inside it.
    pub bounding: [Vector2<f64>; 3],
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            bary_tol: BARY_TOL,
            bounding: [
                Vector2::new(400.0, -1000.0),
                Vector2::new(-400.0, 700.0),
                Vector2::new(1200.0, 700.0),
            ],
        }
    }
}

/// Undirected pair of point indices. Order is kept as given; equality is not.
#[derive(Clone, Copy, Debug)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// Endpoints sorted ascending; use for hashing/comparison.
    #[inline]
    pub fn key(self) -> (usize, usize) {
        if self.0 <= self.1 {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// What a triangle stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Touches at least one bounding point; scaffolding, not user geometry.
    Bounding,
    /// Spanned by application points only.
    Application,
}

impl Role {
    #[inline]
    pub fn of(vertices: [usize; 3]) -> Self {
        if vertices.iter().any(|&v| v < BOUNDING_POINTS) {
            Role::Bounding
        } else {
            Role::Application
        }
    }
}

/// Triangle of three point indices (fixed order, no orientation guarantee).
///
/// `drawable` starts as `role() == Role::Application` and is free for the
/// renderer to toggle; the vertex indices are read-only outside the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    vertices: [usize; 3],
    pub drawable: bool,
}

impl Triangle {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let vertices = [a, b, c];
        Self {
            vertices,
            drawable: Role::of(vertices) == Role::Application,
        }
    }
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }
    #[inline]
    pub fn role(&self) -> Role {
        Role::of(self.vertices)
    }
    /// Local position (0..3) of point index `v`, if it is a vertex.
    #[inline]
    pub fn position_of(&self, v: usize) -> Option<usize> {
        self.vertices.iter().position(|&x| x == v)
    }
    #[inline]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }
    /// The three edges `(v0,v1)`, `(v1,v2)`, `(v2,v0)`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertices;
        [Edge(a, b), Edge(b, c), Edge(c, a)]
    }
    /// Vertex indices sorted ascending; identity up to vertex order.
    #[inline]
    pub fn sorted(&self) -> [usize; 3] {
        let mut v = self.vertices;
        v.sort_unstable();
        v
    }
}
