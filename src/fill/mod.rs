//! Automatic claiming of areas a faction has enclosed

pub mod adjacency;
pub mod engine;
pub mod flood;
pub mod seed;
pub mod traversal;

pub use adjacency::Connections;
pub use engine::{ClaimFiller, FillReport};
pub use flood::{flood_fill, FloodFill};
pub use seed::{point_in_path, resolve_seed};
pub use traversal::{BoundaryTracer, BranchOrder, Closure, ClosureKind};
