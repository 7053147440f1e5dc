//! OpenTransit - 公交运行指标客户端服务
//!
//! 架构设计: Redux 风格状态 + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Action: 所有状态变更事件
//! - RoutesState: 状态树与 reducer
//! - GraphParams: 查询参数
//! - Precomputed: 预计算统计的对象存储布局
//!
//! 应用层 (application/):
//! - Ports: MetricsApi, ObjectStore, Store
//! - Handlers: graph / interval / 预计算 / 线路 / 到站 / 蜘蛛图
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket 事件流
//! - Memory: 内存 Store
//! - Adapters: Metrics API / 对象存储 HTTP 客户端
//! - Events: Action 广播

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
