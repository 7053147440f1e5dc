//! Routes Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::state::AppState;

/// 拉取线路列表，结果通过事件流下发
pub async fn fetch_routes(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Empty>> {
    state.routes_handler.fetch_routes().await;
    Json(ApiResponse::ok())
}
