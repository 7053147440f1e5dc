//! Actions - 派发到应用状态的事件
//!
//! JSON 形式：`{"type": "RECEIVED_GRAPH_DATA", "payload": ..., "graphParams": ...}`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::graph_params::{GraphParams, GraphParamsPatch};

/// 地图坐标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// 传输层错误（线路列表失败时原样下发）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportError {
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "RECEIVED_GRAPH_PARAMS")]
    ReceivedGraphParams { payload: GraphParamsPatch },

    #[serde(rename = "RECEIVED_GRAPH_DATA")]
    ReceivedGraphData {
        payload: Value,
        #[serde(rename = "graphParams")]
        graph_params: GraphParams,
    },

    #[serde(rename = "RECEIVED_GRAPH_ERROR")]
    ReceivedGraphError { payload: String },

    /// payload: null
    #[serde(rename = "RESET_GRAPH_DATA")]
    ResetGraphData {
        #[serde(default)]
        payload: (),
    },

    #[serde(rename = "RECEIVED_INTERVAL_DATA")]
    ReceivedIntervalData {
        payload: Value,
        #[serde(rename = "graphParams")]
        graph_params: GraphParams,
    },

    #[serde(rename = "RECEIVED_INTERVAL_ERROR")]
    ReceivedIntervalError { payload: String },

    /// payload: null
    #[serde(rename = "RESET_INTERVAL_DATA")]
    ResetIntervalData {
        #[serde(default)]
        payload: (),
    },

    #[serde(rename = "RECEIVED_ROUTES")]
    ReceivedRoutes { payload: Vec<Value> },

    #[serde(rename = "RECEIVED_ROUTES_ERROR")]
    ReceivedRoutesError { payload: TransportError },

    /// payload: [data, cacheKey]
    #[serde(rename = "RECEIVED_PRECOMPUTED_TRIP_TIMES")]
    ReceivedPrecomputedTripTimes { payload: (Arc<Value>, String) },

    /// payload: [data, cacheKey]
    #[serde(rename = "RECEIVED_PRECOMPUTED_WAIT_TIMES")]
    ReceivedPrecomputedWaitTimes { payload: (Arc<Value>, String) },

    /// payload: [data, date, routeId]
    #[serde(rename = "RECEIVED_ARRIVALS")]
    ReceivedArrivals { payload: (Arc<Value>, String, String) },

    /// payload: [stops, latLng]
    #[serde(rename = "RECEIVED_SPIDER_MAP_CLICK")]
    ReceivedSpiderMapClick { payload: (Vec<Value>, LatLng) },
}

impl Action {
    /// 事件名称
    pub fn name(&self) -> &'static str {
        match self {
            Action::ReceivedGraphParams { .. } => "RECEIVED_GRAPH_PARAMS",
            Action::ReceivedGraphData { .. } => "RECEIVED_GRAPH_DATA",
            Action::ReceivedGraphError { .. } => "RECEIVED_GRAPH_ERROR",
            Action::ResetGraphData { .. } => "RESET_GRAPH_DATA",
            Action::ReceivedIntervalData { .. } => "RECEIVED_INTERVAL_DATA",
            Action::ReceivedIntervalError { .. } => "RECEIVED_INTERVAL_ERROR",
            Action::ResetIntervalData { .. } => "RESET_INTERVAL_DATA",
            Action::ReceivedRoutes { .. } => "RECEIVED_ROUTES",
            Action::ReceivedRoutesError { .. } => "RECEIVED_ROUTES_ERROR",
            Action::ReceivedPrecomputedTripTimes { .. } => "RECEIVED_PRECOMPUTED_TRIP_TIMES",
            Action::ReceivedPrecomputedWaitTimes { .. } => "RECEIVED_PRECOMPUTED_WAIT_TIMES",
            Action::ReceivedArrivals { .. } => "RECEIVED_ARRIVALS",
            Action::ReceivedSpiderMapClick { .. } => "RECEIVED_SPIDER_MAP_CLICK",
        }
    }

    /// 是否为 graph / interval 数据请求的结果
    pub fn is_metrics_outcome(&self) -> bool {
        matches!(
            self,
            Action::ReceivedGraphData { .. }
                | Action::ReceivedGraphError { .. }
                | Action::ReceivedIntervalData { .. }
                | Action::ReceivedIntervalError { .. }
        )
    }
}
