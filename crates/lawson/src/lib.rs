//! Incremental 2D Delaunay triangulation with Lawson flips.
//!
//! Points live in an append-only store, triangles in an index-addressed mesh
//! seeded with one oversized bounding triangle. Each inserted point splits the
//! triangle containing it and an explicit flip stack restores the
//! empty-circumcircle property.
//!
//! API Policy
//! - The driver (`Triangulation`) is the supported surface: `insert_point`,
//!   `triangulate`, `reset`, plus read access to points and triangles.
//! - `mesh` exposes the building blocks for tests and tooling; triangle positions
//!   from it never survive a mutating call.
//!
//! Limits
//! - Floating-point predicates only; near-degenerate input is not guarded.
//! - Point location is a linear scan.

pub mod api;
pub mod mesh;
pub mod predicates;
pub mod sample;
pub mod triangulation;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use mesh::{Edge, FlipStats, MeshCfg, Role, Triangle};
pub use nalgebra::Vector2 as Vec2;
pub use triangulation::{Insertion, MeshError, Rebuild, Triangulation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::mesh::{Edge, MeshCfg, Role, Triangle};
    pub use crate::triangulation::{Insertion, MeshError, Triangulation};
    pub use nalgebra::Vector2 as Vec2;
}
