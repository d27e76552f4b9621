//! Local wiki directory access

pub mod scanner;

pub use scanner::{enumerate_documents, MARKDOWN_EXTENSION};
