//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod story_store;
mod text_generator;

pub use story_store::{StoreError, StoryStorePort};
pub use text_generator::{GenerateRequest, GenerateResponse, GeneratorError, TextGeneratorPort};
