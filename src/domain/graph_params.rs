//! Graph Params - 用户选择的查询参数
//!
//! 线路、方向、起止站点、日期以及可选的时间窗口

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// 日期格式 (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphParamsError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// 查询参数
///
/// 字段名与 metrics API 的 query 参数一致（camelCase）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_stop_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_stop_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// 时间窗口开始 (HH:MM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// 时间窗口结束 (HH:MM，可带 +1 表示次日)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// 空字符串视为未设置
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl GraphParams {
    pub fn route_id(&self) -> Option<&str> {
        present(&self.route_id)
    }

    pub fn direction_id(&self) -> Option<&str> {
        present(&self.direction_id)
    }

    pub fn start_stop_id(&self) -> Option<&str> {
        present(&self.start_stop_id)
    }

    pub fn end_stop_id(&self) -> Option<&str> {
        present(&self.end_stop_id)
    }

    pub fn date(&self) -> Option<&str> {
        present(&self.date)
    }

    pub fn start_time(&self) -> Option<&str> {
        present(&self.start_time)
    }

    pub fn end_time(&self) -> Option<&str> {
        present(&self.end_time)
    }

    /// 线路、方向、起点站、终点站是否齐全
    pub fn has_stop_pair(&self) -> bool {
        self.route_id().is_some()
            && self.direction_id().is_some()
            && self.start_stop_id().is_some()
            && self.end_stop_id().is_some()
    }

    /// 时间窗口字符串："start-end"，无开始时间时为空串
    pub fn time_range(&self) -> String {
        match self.start_time() {
            Some(start) => format!("{}-{}", start, self.end_time().unwrap_or_default()),
            None => String::new(),
        }
    }

    /// 去掉 startTime / endTime 的副本（interval 请求使用默认时间窗口）
    pub fn without_time_range(&self) -> Self {
        Self {
            start_time: None,
            end_time: None,
            ..self.clone()
        }
    }

    /// 构造请求 query 参数，未设置的字段不出现
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("routeId", &self.route_id),
            ("directionId", &self.direction_id),
            ("startStopId", &self.start_stop_id),
            ("endStopId", &self.end_stop_id),
            ("date", &self.date),
            ("startTime", &self.start_time),
            ("endTime", &self.end_time),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name, v.clone())))
            .collect()
    }

    /// 合并 patch：缺省字段保持不变，null 清空，有值则覆盖
    pub fn merge(&mut self, patch: &GraphParamsPatch) {
        fn apply(target: &mut Option<String>, update: &Option<Option<String>>) {
            if let Some(value) = update {
                *target = value.clone();
            }
        }

        apply(&mut self.route_id, &patch.route_id);
        apply(&mut self.direction_id, &patch.direction_id);
        apply(&mut self.start_stop_id, &patch.start_stop_id);
        apply(&mut self.end_stop_id, &patch.end_stop_id);
        apply(&mut self.date, &patch.date);
        apply(&mut self.start_time, &patch.start_time);
        apply(&mut self.end_time, &patch.end_time);
    }
}

/// RECEIVED_GRAPH_PARAMS 的 payload
///
/// 每个字段三态：缺省 = 不修改，`null` = 清空，值 = 设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphParamsPatch {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub route_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub direction_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub start_stop_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub end_stop_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Option<String>>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl GraphParamsPatch {
    /// 校验 patch 中设置的日期
    pub fn validate(&self) -> Result<(), GraphParamsError> {
        match &self.date {
            Some(Some(date)) if !date.is_empty() => parse_service_date(date).map(|_| ()),
            _ => Ok(()),
        }
    }
}

/// 用完整参数构造 patch（全部字段覆盖）
impl From<GraphParams> for GraphParamsPatch {
    fn from(params: GraphParams) -> Self {
        Self {
            route_id: Some(params.route_id),
            direction_id: Some(params.direction_id),
            start_stop_id: Some(params.start_stop_id),
            end_stop_id: Some(params.end_stop_id),
            date: Some(params.date),
            start_time: Some(params.start_time),
            end_time: Some(params.end_time),
        }
    }
}

/// 解析服务日期
pub fn parse_service_date(date: &str) -> Result<NaiveDate, GraphParamsError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| GraphParamsError::InvalidDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_params() -> GraphParams {
        GraphParams {
            route_id: Some("12".to_string()),
            direction_id: Some("O".to_string()),
            start_stop_id: Some("4970".to_string()),
            end_stop_id: Some("4960".to_string()),
            date: Some("2023-05-01".to_string()),
            start_time: Some("07:00".to_string()),
            end_time: Some("19:00".to_string()),
        }
    }

    #[test]
    fn test_has_stop_pair() {
        assert!(full_params().has_stop_pair());

        let mut params = full_params();
        params.end_stop_id = None;
        assert!(!params.has_stop_pair());

        let mut params = full_params();
        params.direction_id = Some(String::new());
        assert!(!params.has_stop_pair());
    }

    #[test]
    fn test_time_range() {
        assert_eq!(full_params().time_range(), "07:00-19:00");
        assert_eq!(GraphParams::default().time_range(), "");
    }

    #[test]
    fn test_without_time_range_drops_query_keys() {
        let params = full_params().without_time_range();
        let keys: Vec<&str> = params.query_pairs().iter().map(|(k, _)| *k).collect();
        assert!(!keys.contains(&"startTime"));
        assert!(!keys.contains(&"endTime"));
        assert_eq!(params.route_id(), Some("12"));
    }

    #[test]
    fn test_query_pairs_skip_missing() {
        let params = GraphParams {
            date: Some("2023-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(params.query_pairs(), vec![("date", "2023-05-01".to_string())]);
    }

    #[test]
    fn test_patch_merge_tri_state() {
        let mut params = full_params();
        let patch: GraphParamsPatch =
            serde_json::from_str(r#"{"routeId": "N", "startStopId": null}"#).unwrap();
        params.merge(&patch);

        assert_eq!(params.route_id(), Some("N"));
        assert_eq!(params.start_stop_id, None);
        // 缺省字段保持不变
        assert_eq!(params.end_stop_id(), Some("4960"));
        assert_eq!(params.date(), Some("2023-05-01"));
    }

    #[test]
    fn test_patch_validate_date() {
        let patch: GraphParamsPatch = serde_json::from_str(r#"{"date": "2023/05/01"}"#).unwrap();
        assert!(patch.validate().is_err());

        let patch: GraphParamsPatch = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert!(patch.validate().is_ok());
    }
}
