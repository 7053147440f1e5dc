//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MetricsApi、ObjectStore、Store）
//! - commands: 命令定义
//! - handlers: 请求与派发逻辑
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod handlers;
pub mod ports;

pub use commands::{FetchArrivalsCommand, SpiderMapClickCommand, UpdateGraphParamsCommand};
pub use error::ApplicationError;
pub use handlers::{
    ArrivalsHandler, FetchTasks, GraphDataHandler, GraphParamsHandler, PrecomputedStatsHandler,
    RoutesHandler, SpiderMapHandler,
};
pub use ports::{FetchError, MetricsApiPort, MetricsEndpoint, ObjectStorePort, StorePort};
