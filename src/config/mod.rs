//! Configuration module for Spendbook
//!
//! This module provides configuration management including:
//! - platform path resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendbookPaths;
pub use settings::Settings;
