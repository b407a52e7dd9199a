//! HTTP Handlers

mod ping;
mod story;

pub use ping::*;
pub use story::*;
