pub mod core;
pub mod environment;
pub mod logging;
pub mod portal_cli;
pub mod render;
pub mod types;
pub mod utils;
pub mod views;

pub use crate::core::{ApiConfig, ConfigManager, PortalClient};
