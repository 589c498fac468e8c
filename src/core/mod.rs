pub mod config;
pub mod error;
pub mod types;

pub use config::FillConfig;
pub use error::{ClaimError, Result};
pub use types::FactionId;
