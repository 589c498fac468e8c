//! Claim records, storage, and claim-added notifications

pub mod claim;
pub mod events;
pub mod store;

pub use claim::Claim;
pub use events::{ClaimListener, Territory};
pub use store::{ClaimMap, ClaimStore};
