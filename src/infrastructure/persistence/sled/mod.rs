//! Sled 持久化实现

mod story_store;

pub use story_store::{SledStoreConfig, SledStoryStore};
