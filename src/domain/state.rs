//! Routes State - 应用状态与 reducer
//!
//! 所有状态变更都通过 [`RoutesState::apply`] 完成

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::actions::{Action, LatLng, TransportError};
use super::graph_params::GraphParams;
use super::precomputed::StatKind;

/// 预计算统计缓存
///
/// key 为 date + timeRange + statName，写入后不淘汰
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCaches {
    pub trip_times_cache: HashMap<String, Arc<Value>>,
    pub wait_times_cache: HashMap<String, Arc<Value>>,
}

impl StatCaches {
    pub fn get(&self, kind: StatKind, key: &str) -> Option<&Arc<Value>> {
        match kind {
            StatKind::TripTimes => self.trip_times_cache.get(key),
            StatKind::WaitTimes => self.wait_times_cache.get(key),
        }
    }

    pub fn contains(&self, kind: StatKind, key: &str) -> bool {
        self.get(kind, key).is_some()
    }

    pub fn insert(&mut self, kind: StatKind, key: String, data: Arc<Value>) {
        match kind {
            StatKind::TripTimes => self.trip_times_cache.insert(key, data),
            StatKind::WaitTimes => self.wait_times_cache.insert(key, data),
        };
    }
}

/// 蜘蛛图点击选中的站点
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderSelection {
    pub stops: Vec<Value>,
    pub lat_lng: LatLng,
}

/// 到站历史
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalsState {
    pub data: Arc<Value>,
    pub date: String,
    pub route_id: String,
}

/// 应用状态
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesState {
    pub graph_params: GraphParams,
    pub graph_data: Option<Value>,
    pub graph_error: Option<String>,
    pub interval_data: Option<Value>,
    pub interval_error: Option<String>,
    pub routes: Option<Vec<Value>>,
    pub routes_error: Option<TransportError>,
    #[serde(flatten)]
    pub stat_caches: StatCaches,
    pub arrivals: Option<ArrivalsState>,
    pub spider_selection: Option<SpiderSelection>,
}

impl RoutesState {
    /// reducer
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::ReceivedGraphParams { payload } => {
                self.graph_params.merge(payload);
            }
            Action::ReceivedGraphData { payload, .. } => {
                self.graph_data = Some(payload.clone());
                self.graph_error = None;
            }
            Action::ReceivedGraphError { payload } => {
                self.graph_data = None;
                self.graph_error = Some(payload.clone());
            }
            Action::ResetGraphData { .. } => {
                self.graph_data = None;
                self.graph_error = None;
            }
            Action::ReceivedIntervalData { payload, .. } => {
                self.interval_data = Some(payload.clone());
                self.interval_error = None;
            }
            Action::ReceivedIntervalError { payload } => {
                self.interval_data = None;
                self.interval_error = Some(payload.clone());
            }
            Action::ResetIntervalData { .. } => {
                self.interval_data = None;
                self.interval_error = None;
            }
            Action::ReceivedRoutes { payload } => {
                self.routes = Some(payload.clone());
                self.routes_error = None;
            }
            Action::ReceivedRoutesError { payload } => {
                self.routes_error = Some(payload.clone());
            }
            Action::ReceivedPrecomputedTripTimes { payload: (data, key) } => {
                self.stat_caches
                    .insert(StatKind::TripTimes, key.clone(), data.clone());
            }
            Action::ReceivedPrecomputedWaitTimes { payload: (data, key) } => {
                self.stat_caches
                    .insert(StatKind::WaitTimes, key.clone(), data.clone());
            }
            Action::ReceivedArrivals {
                payload: (data, date, route_id),
            } => {
                self.arrivals = Some(ArrivalsState {
                    data: data.clone(),
                    date: date.clone(),
                    route_id: route_id.clone(),
                });
            }
            Action::ReceivedSpiderMapClick {
                payload: (stops, lat_lng),
            } => {
                self.spider_selection = Some(SpiderSelection {
                    stops: stops.clone(),
                    lat_lng: *lat_lng,
                });
            }
        }
    }
}
