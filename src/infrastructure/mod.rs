//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - GitHub REST API client
//! - Wiki directory scanning
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod github;
pub mod logging;
pub mod wiki;
