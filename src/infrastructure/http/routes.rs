//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/state               GET   当前状态快照
//! - /api/graph_params        POST  更新查询参数（后台请求 metrics / 预计算数据）
//! - /api/routes/fetch        POST  拉取线路列表
//! - /api/arrivals/fetch      POST  拉取某日某线路的到站历史
//! - /api/spider_map/click    POST  记录蜘蛛图点击
//! - /ws/events               WS    Action 事件流

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/events", get(handlers::events_websocket_handler))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/state", get(handlers::get_state))
        .route("/graph_params", post(handlers::update_graph_params))
        .route("/routes/fetch", post(handlers::fetch_routes))
        .route("/arrivals/fetch", post(handlers::fetch_arrivals))
        .route("/spider_map/click", post(handlers::spider_map_click))
}
