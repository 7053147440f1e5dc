//! State Handler - 状态快照

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::RoutesState;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<ApiResponse<RoutesState>> {
    Json(ApiResponse::success(state.store.snapshot()))
}
