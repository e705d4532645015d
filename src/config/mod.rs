//! Configuration module
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KitchenPaths;
pub use settings::{ClassifierSettings, Settings};
