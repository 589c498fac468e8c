//! Square grid coordinates and directions (4-connected)

pub mod dir;
pub mod point;

pub use dir::{Corner, Direction};
pub use point::GridPoint;
