//! Port trait definitions (Hexagonal Architecture)
//!
//! - IssueTracker: remote repository lookup and issue creation
//!
//! The publisher service only talks to the tracker through this trait, so
//! tests can substitute an in-memory tracker for the GitHub adapter.

pub mod issue_tracker;

pub use issue_tracker::{IssueTracker, TrackerError, TrackerResult};
