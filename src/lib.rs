//! Kitchen CLI - Terminal-based kitchen manager
//!
//! This library provides the core functionality for the Kitchen CLI
//! application: an ingredient store with expiry tracking, recipe suggestions
//! from what is in stock, waste and expense ledgers, and a small decision
//! tree that predicts freshness from how long food has been kept.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (ingredients, recipes, ledger entries, etc.)
//! - `storage`: CSV file storage layer
//! - `audit`: Audit logging system
//! - `classifier`: Expiry prediction decision tree
//! - `services`: Business logic layer
//! - `reports`: Inventory, expense, waste and dashboard reports
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers
//! - `menu`: Interactive text menu
//!
//! # Example
//!
//! ```rust,ignore
//! use kitchen_cli::config::{KitchenPaths, Settings};
//! use kitchen_cli::storage::Storage;
//!
//! let paths = KitchenPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::KitchenError;
