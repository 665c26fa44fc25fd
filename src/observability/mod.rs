pub mod middleware;
pub mod tracing;

pub use middleware::request_tracing_middleware;
pub use tracing::init_tracing;
