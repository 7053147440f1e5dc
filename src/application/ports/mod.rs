//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod fetch_error;
mod metrics_api;
mod object_store;
mod store;

pub use fetch_error::FetchError;
pub use metrics_api::{MetricsApiPort, MetricsEndpoint};
pub use object_store::ObjectStorePort;
pub use store::StorePort;
