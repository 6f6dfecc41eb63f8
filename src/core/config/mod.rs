//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - User configuration files
//! - Check settings

pub mod user_config;

// Simple, clear re-exports
pub use crate::core::cli::CliArgs;
pub use crate::core::settings::{CheckSettings, DEFAULT_TOLERANCE};
pub use user_config::ConfigFile;
