pub mod copier;
pub mod engine;

pub use crate::config::CopyConfig;
pub use crate::utils::error::Result;
