//! Precomputed Statistics - 预计算统计文件寻址
//!
//! 对象存储路径规则：
//! `{base}/{kind}/v1/{agency}/{YYYY}/{MM}/{DD}/{kind}_v1_{agency}_{date}_{stat}{time}.json.gz`

use serde::{Deserialize, Serialize};

/// 默认统计量
pub const MEDIAN: &str = "median";

/// 预计算统计类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    TripTimes,
    WaitTimes,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::TripTimes => "trip-times",
            StatKind::WaitTimes => "wait-times",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 时间窗口文件名后缀
///
/// - `""` -> `""`
/// - `"07:00-19:00"` -> `"_0700_1900"`
/// - `"23:00-03:00+1"` -> `"_2300_0300%2B1"`
pub fn time_path(time_str: &str) -> String {
    if time_str.is_empty() {
        return String::new();
    }

    let path = time_str
        .replace(':', "")
        .replacen('-', "_", 1)
        .replace('+', "%2B");
    format!("_{}", path)
}

/// 统计量文件名片段
///
/// p10 / p90 与中位数存放在同一个文件中
pub fn stat_path(stat: &str) -> &str {
    match stat {
        "p10" | "p90" => "p10-median-p90",
        other => other,
    }
}

/// 缓存 key：date + timeRange + statName
pub fn cache_key(date: &str, time_str: &str, stat: &str) -> String {
    format!("{}{}{}", date, time_str, stat)
}

/// `2023-05-01` -> `2023/05/01`
pub fn date_path(date: &str) -> String {
    date.replace('-', "/")
}

/// 对象存储布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStoreLayout {
    /// 预计算统计 bucket 根 URL
    pub precomputed_stats_url: String,
    /// 到站历史 bucket 根 URL
    pub arrivals_url: String,
    /// 运营商标识
    pub agency: String,
}

impl Default for ObjectStoreLayout {
    fn default() -> Self {
        Self {
            precomputed_stats_url: "https://opentransit-precomputed-stats.s3.amazonaws.com"
                .to_string(),
            arrivals_url: "https://opentransit-stop-arrivals.s3.amazonaws.com".to_string(),
            agency: "sf-muni".to_string(),
        }
    }
}

impl ObjectStoreLayout {
    /// 预计算 wait/trip time 文件 URL
    pub fn stat_url(&self, kind: StatKind, date: &str, time_str: &str, stat: &str) -> String {
        format!(
            "{base}/{kind}/v1/{agency}/{date_path}/{kind}_v1_{agency}_{date}_{stat}{time}.json.gz",
            base = self.precomputed_stats_url.trim_end_matches('/'),
            kind = kind.as_str(),
            agency = self.agency,
            date_path = date_path(date),
            date = date,
            stat = stat_path(stat),
            time = time_path(time_str),
        )
    }

    /// 到站历史文件 URL
    pub fn arrivals_url(&self, date: &str, route_id: &str) -> String {
        format!(
            "{base}/v4/{agency}/{date_path}/arrivals_v4_{agency}_{date}_{route_id}.json.gz",
            base = self.arrivals_url.trim_end_matches('/'),
            agency = self.agency,
            date_path = date_path(date),
            date = date,
            route_id = route_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_path() {
        assert_eq!(time_path(""), "");
        assert_eq!(time_path("07:00-19:00"), "_0700_1900");
        assert_eq!(time_path("23:00-03:00+1"), "_2300_0300%2B1");
    }

    #[test]
    fn test_stat_path() {
        assert_eq!(stat_path(MEDIAN), "median");
        assert_eq!(stat_path("p10"), "p10-median-p90");
        assert_eq!(stat_path("p90"), "p10-median-p90");
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("2023-05-01", "", MEDIAN), "2023-05-01median");
        assert_eq!(
            cache_key("2023-05-01", "07:00-19:00", MEDIAN),
            "2023-05-0107:00-19:00median"
        );
    }

    #[test]
    fn test_stat_url_without_time_range() {
        let layout = ObjectStoreLayout::default();
        assert_eq!(
            layout.stat_url(StatKind::TripTimes, "2023-05-01", "", MEDIAN),
            "https://opentransit-precomputed-stats.s3.amazonaws.com/trip-times/v1/sf-muni/2023/05/01/trip-times_v1_sf-muni_2023-05-01_median.json.gz"
        );
    }

    #[test]
    fn test_stat_url_with_time_range() {
        let layout = ObjectStoreLayout::default();
        assert_eq!(
            layout.stat_url(StatKind::WaitTimes, "2023-05-01", "07:00-19:00", MEDIAN),
            "https://opentransit-precomputed-stats.s3.amazonaws.com/wait-times/v1/sf-muni/2023/05/01/wait-times_v1_sf-muni_2023-05-01_median_0700_1900.json.gz"
        );
    }

    #[test]
    fn test_arrivals_url() {
        let layout = ObjectStoreLayout {
            arrivals_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            layout.arrivals_url("2023-05-01", "12"),
            "http://localhost:9000/v4/sf-muni/2023/05/01/arrivals_v4_sf-muni_2023-05-01_12.json.gz"
        );
    }
}
