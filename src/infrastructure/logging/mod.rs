//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON formatting on stderr
//! - Secret scrubbing for anything echoed from the API
pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::LogFormat;
pub use logger::init_logging;
pub use secret_scrubbing::SecretScrubber;
