//! Faction Claims - territorial claims with automatic enclosed-area filling

pub mod claims;
pub mod core;
pub mod fill;
pub mod grid;
pub mod sim;
