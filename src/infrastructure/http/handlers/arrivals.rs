//! Arrivals Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::FetchArrivalsCommand;
use crate::infrastructure::http::dto::{ApiResponse, FetchArrivalsRequest, FetchArrivalsResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn fetch_arrivals(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FetchArrivalsRequest>,
) -> Result<Json<ApiResponse<FetchArrivalsResponse>>, ApiError> {
    let cmd = FetchArrivalsCommand {
        date: req.date,
        route_id: req.route_id,
    };

    let received = state.arrivals_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(FetchArrivalsResponse { received })))
}
