// src/core/mod.rs
//! Configuration, the API client and version reduction

pub mod config_manager;
pub mod portal_client;
pub mod versioning;

pub use config_manager::{ApiConfig, ConfigManager};
pub use portal_client::PortalClient;
pub use versioning::{latest_versions, Versioned};
