//! Precomputed Stats Handler - 预计算 wait / trip time
//!
//! 缓存状态由调用方显式传入；命中则跳过，未命中则从对象存储下载。
//! 下载失败不派发事件，缓存槽位保持为空，下次调用会重新请求。

use dashmap::DashMap;
use futures_util::future::join;
use std::sync::Arc;

use crate::application::ports::{ObjectStorePort, StorePort};
use crate::domain::{cache_key, Action, GraphParams, ObjectStoreLayout, StatCaches, StatKind, MEDIAN};

type FlightKey = (StatKind, String);

/// 离开作用域时释放 in-flight 标记（包括 future 被中途丢弃）
struct InFlightGuard<'a> {
    in_flight: &'a DashMap<FlightKey, ()>,
    key: FlightKey,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(&self.key);
    }
}

pub struct PrecomputedStatsHandler {
    object_store: Arc<dyn ObjectStorePort>,
    store: Arc<dyn StorePort>,
    layout: ObjectStoreLayout,
    /// 正在下载的 (kind, cache key)
    in_flight: DashMap<FlightKey, ()>,
}

impl PrecomputedStatsHandler {
    pub fn new(
        object_store: Arc<dyn ObjectStorePort>,
        store: Arc<dyn StorePort>,
        layout: ObjectStoreLayout,
    ) -> Self {
        Self {
            object_store,
            store,
            layout,
            in_flight: DashMap::new(),
        }
    }

    /// 为 params 的日期/时间窗口拉取 trip times 与 wait times
    ///
    /// 返回实际发出的请求数
    pub async fn fetch_wait_and_trip_data(&self, params: &GraphParams, caches: &StatCaches) -> usize {
        let Some(date) = params.date() else {
            return 0;
        };
        let time_str = params.time_range();
        let key = cache_key(date, &time_str, MEDIAN);

        let (trip, wait) = join(
            self.fetch_stat(StatKind::TripTimes, date, &time_str, &key, caches),
            self.fetch_stat(StatKind::WaitTimes, date, &time_str, &key, caches),
        )
        .await;

        usize::from(trip) + usize::from(wait)
    }

    async fn fetch_stat(
        &self,
        kind: StatKind,
        date: &str,
        time_str: &str,
        key: &str,
        caches: &StatCaches,
    ) -> bool {
        if caches.contains(kind, key) {
            tracing::debug!(kind = %kind, key = %key, "Precomputed stats cache hit");
            return false;
        }

        let flight = (kind, key.to_string());
        if self.in_flight.insert(flight.clone(), ()).is_some() {
            tracing::debug!(kind = %kind, key = %key, "Precomputed stats already in flight");
            return false;
        }
        let _guard = InFlightGuard {
            in_flight: &self.in_flight,
            key: flight,
        };

        let url = self.layout.stat_url(kind, date, time_str, MEDIAN);
        tracing::debug!(kind = %kind, url = %url, "Fetching precomputed stats");

        match self.object_store.get_json(&url).await {
            Ok(data) => {
                let payload = (Arc::new(data), key.to_string());
                let action = match kind {
                    StatKind::TripTimes => Action::ReceivedPrecomputedTripTimes { payload },
                    StatKind::WaitTimes => Action::ReceivedPrecomputedWaitTimes { payload },
                };
                self.store.dispatch(action);
                tracing::info!(kind = %kind, key = %key, "Precomputed stats received");
            }
            Err(e) => {
                tracing::warn!(kind = %kind, url = %url, error = %e, "Failed to fetch precomputed stats");
            }
        }

        true
    }
}
