//! HTTP Layer - 中继的对外接口

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
