//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{GraphParams, LatLng};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Graph Params DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphParamsResponse {
    /// 本次请求的代数，过期结果不会派发
    pub generation: u64,
    /// 合并后的参数
    pub graph_params: GraphParams,
    /// 启动的后台请求数
    pub tasks: usize,
}

// ============================================================================
// Arrivals DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FetchArrivalsRequest {
    pub date: String,
    #[serde(alias = "routeId")]
    pub route_id: String,
}

#[derive(Debug, Serialize)]
pub struct FetchArrivalsResponse {
    pub received: bool,
}

// ============================================================================
// Spider Map DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderMapClickRequest {
    #[serde(default)]
    pub stops: Vec<Value>,
    pub lat_lng: LatLng,
}
