//! Index-addressed arenas: `PointStore`, `TriangleMesh`, and the `Mesh` pairing them.
//!
//! Point indices are stable until the store is cleared. Triangle positions are
//! not: any removal shifts later triangles, so positions must not outlive a
//! mutating call.

use nalgebra::Vector2;

use super::types::{MeshCfg, Triangle};

/// Append-only ordered sequence of 2D points.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    pts: Vec<Vector2<f64>>,
}

impl PointStore {
    /// Append `p`; returns its index.
    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) -> usize {
        self.pts.push(p);
        self.pts.len() - 1
    }
    #[inline]
    pub fn get(&self, i: usize) -> Vector2<f64> {
        self.pts[i]
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.pts
    }
    /// Move all points out, leaving the store empty.
    pub fn take(&mut self) -> Vec<Vector2<f64>> {
        std::mem::take(&mut self.pts)
    }
    pub fn reserve(&mut self, additional: usize) {
        self.pts.reserve(additional);
    }
}

/// Mutable collection of triangles addressed by position.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    tris: Vec<Triangle>,
}

impl TriangleMesh {
    #[inline]
    pub fn push(&mut self, t: Triangle) {
        self.tris.push(t);
    }
    /// Remove the triangle at `i`, shifting later positions down by one.
    #[inline]
    pub fn remove(&mut self, i: usize) -> Triangle {
        self.tris.remove(i)
    }
    #[inline]
    pub fn get(&self, i: usize) -> &Triangle {
        &self.tris[i]
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.tris.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tris.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Triangle] {
        &self.tris
    }
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Triangle] {
        &mut self.tris
    }
    pub fn clear(&mut self) {
        self.tris.clear();
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.tris.iter()
    }
}

/// Points and triangles owned together; every mesh operation works on both.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub points: PointStore,
    pub tris: TriangleMesh,
}

impl Mesh {
    /// Bounded state: the three corners of `cfg.bounding` and their one triangle.
    pub fn bounded(cfg: &MeshCfg) -> Self {
        let mut mesh = Mesh::default();
        for p in cfg.bounding {
            mesh.points.push(p);
        }
        mesh.tris.push(Triangle::new(0, 1, 2));
        mesh
    }

    /// Coordinates of the three corners of triangle `t`.
    #[inline]
    pub fn corners(&self, t: &Triangle) -> [Vector2<f64>; 3] {
        t.vertices().map(|v| self.points.get(v))
    }
}
