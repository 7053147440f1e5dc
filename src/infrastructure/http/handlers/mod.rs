//! HTTP Handlers

mod arrivals;
mod graph_params;
mod ping;
mod routes;
mod spider_map;
mod state;
mod websocket;

pub use arrivals::*;
pub use graph_params::*;
pub use ping::*;
pub use routes::*;
pub use spider_map::*;
pub use state::*;
pub use websocket::*;
