//! Triangle mesh over an index-addressed point store.
//!
//! Purpose
//! - Hold points and triangles as two arenas cross-referenced by integer index.
//! - Provide the building blocks of incremental Delaunay insertion: edge
//!   adjacency, point location, one-to-three split, and Lawson flips.
//!
//! Layout
//! - `types.rs` (Edge, Triangle, Role, MeshCfg), `store.rs` (arenas),
//!   `adjacency.rs`, `locate.rs`, `insert.rs`, `legalize.rs` (each adds an
//!   `impl Mesh` block).
//!
//! Invariants
//! - Every edge of the mesh is owned by one (hull) or two (interior) triangles.
//!   Queries that observe anything else panic.
//! - Triangle positions shift on every removal; nothing here hands out a
//!   position that survives a mutating call.

mod adjacency;
mod insert;
mod legalize;
mod locate;
mod store;
mod types;

pub use adjacency::EdgeOwner;
pub use insert::SplitOutcome;
pub use legalize::FlipStats;
pub use store::{Mesh, PointStore, TriangleMesh};
pub use types::{Edge, MeshCfg, Role, Triangle, BOUNDING_POINTS};
