pub mod client;
pub mod error;
pub mod extract;

pub use client::{KickClient, StreamResolver, LIVE_STREAM_TITLE};
pub use error::UpstreamError;
pub use extract::FieldPath;
