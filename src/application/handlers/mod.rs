//! Action Handlers 实现
//!
//! 每个 handler 负责一类请求，并把结果派发到 StorePort

mod arrivals_handlers;
mod graph_data_handlers;
mod graph_params_handlers;
mod precomputed_handlers;
mod routes_handlers;
mod spider_map_handlers;

pub use arrivals_handlers::*;
pub use graph_data_handlers::*;
pub use graph_params_handlers::*;
pub use precomputed_handlers::*;
pub use routes_handlers::*;
pub use spider_map_handlers::*;
