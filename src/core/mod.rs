//! Core application functionality
//!
//! This module contains the host side of the reporter:
//! - Settings and CLI handling
//! - User configuration files
//! - Running the check from the command line

pub mod cli;
pub mod config;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use runner::run_app;
pub use settings::CheckSettings;
