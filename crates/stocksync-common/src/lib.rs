//! Common utilities for stocksync
//!
//! This crate provides the shared error type used across all stocksync crates.

pub mod error;

pub use error::{Result, SyncError};
