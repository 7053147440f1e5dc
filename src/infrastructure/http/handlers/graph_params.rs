//! Graph Params Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::UpdateGraphParamsCommand;
use crate::domain::GraphParamsPatch;
use crate::infrastructure::http::dto::{ApiResponse, GraphParamsResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 更新查询参数，graph / interval / 预计算请求在后台执行
pub async fn update_graph_params(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<GraphParamsPatch>,
) -> Result<Json<ApiResponse<GraphParamsResponse>>, ApiError> {
    let tasks = state
        .graph_params_handler
        .handle(UpdateGraphParamsCommand { patch })?;

    Ok(Json(ApiResponse::success(GraphParamsResponse {
        generation: tasks.generation,
        tasks: tasks.len(),
        graph_params: tasks.graph_params.clone(),
    })))
}
