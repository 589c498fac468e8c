//! Scenario replay for the claim simulator

pub mod render;
pub mod scenario;

pub use render::{render_json, render_level};
pub use scenario::{Replay, Scenario, ScenarioClaim};
