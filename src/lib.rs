pub mod config;
pub mod core;
pub mod utils;

pub use config::{CliConfig, CopyConfig};
pub use core::{copier::CopyReport, engine::CopyEngine};
pub use utils::error::{CopyError, Result};
