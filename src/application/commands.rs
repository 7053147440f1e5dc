//! 应用层 - 命令
//!
//! 由 HTTP 层构造，交给对应的 handler 执行

use serde_json::Value;

use crate::domain::{GraphParamsPatch, LatLng};

/// 更新查询参数
#[derive(Debug, Clone, Default)]
pub struct UpdateGraphParamsCommand {
    pub patch: GraphParamsPatch,
}

/// 拉取某日某线路的到站历史
#[derive(Debug, Clone)]
pub struct FetchArrivalsCommand {
    pub date: String,
    pub route_id: String,
}

/// 蜘蛛图点击
#[derive(Debug, Clone)]
pub struct SpiderMapClickCommand {
    pub stops: Vec<Value>,
    pub lat_lng: LatLng,
}
