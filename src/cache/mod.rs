pub mod store;
pub mod stream_list;

pub use store::{CachedEntry, EntryStore};
pub use stream_list::{StreamCache, StreamError};
