//! Shared infrastructure for coursekit
//!
//! This crate provides:
//! - Error type and Result alias used across the workspace
//! - StateStore abstraction over string key-value state
//! - MemoryStore for ephemeral sessions and tests
//! - JsonFileStore persisting state to a single JSON file

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod store;

pub use error::{Error, Result};
pub use store::{JsonFileStore, MemoryStore, StateStore, StateStoreExt};
