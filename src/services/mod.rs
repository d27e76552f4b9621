pub mod progress;
pub mod publisher;

pub use progress::Progress;
pub use publisher::{preview, WikiPublisher};
