//! Domain layer for the wiki publisher
//!
//! This module contains the documents, repository identities and publish
//! outcomes the tool works with, plus the port the issue tracker adapter
//! implements.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::PublishError;
