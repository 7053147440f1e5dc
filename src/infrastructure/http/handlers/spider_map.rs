//! Spider Map Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::SpiderMapClickCommand;
use crate::infrastructure::http::dto::{ApiResponse, Empty, SpiderMapClickRequest};
use crate::infrastructure::http::state::AppState;

pub async fn spider_map_click(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpiderMapClickRequest>,
) -> Json<ApiResponse<Empty>> {
    state.spider_map_handler.handle(SpiderMapClickCommand {
        stops: req.stops,
        lat_lng: req.lat_lng,
    });
    Json(ApiResponse::ok())
}
