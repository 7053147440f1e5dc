//! Graph Params Handler - 查询参数变更编排
//!
//! 1. 派发 RECEIVED_GRAPH_PARAMS，读回合并后的参数
//! 2. 有日期：拉取预计算 wait / trip time
//! 3. 线路、方向、起止站齐全：并发拉取 graph 与 interval 数据（interval 去掉时间窗口）
//! 4. 否则：重置 graph 与 interval 数据
//!
//! 每次调用都会取消上一轮尚未完成的 graph / interval 请求，
//! 结果派发前再核对一次代数，过期结果直接丢弃。

use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::{GraphDataHandler, PrecomputedStatsHandler};
use crate::application::commands::UpdateGraphParamsCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{MetricsEndpoint, StorePort};
use crate::domain::{Action, GraphParams};

/// 当前这一轮 graph / interval 请求
struct Flight {
    generation: u64,
    token: CancellationToken,
}

/// 一次参数变更启动的后台任务
pub struct FetchTasks {
    pub generation: u64,
    pub graph_params: GraphParams,
    handles: Vec<JoinHandle<()>>,
}

impl FetchTasks {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// 等待全部任务结束（被取消的任务会提前返回）
    pub async fn join(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::error!(generation = self.generation, error = %e, "Fetch task failed");
            }
        }
    }
}

/// 取消上一轮请求并开始新一代
fn next_flight(flight: &mut Flight) -> (u64, CancellationToken) {
    flight.token.cancel();
    flight.generation += 1;
    flight.token = CancellationToken::new();
    (flight.generation, flight.token.clone())
}

pub struct GraphParamsHandler {
    store: Arc<dyn StorePort>,
    graph_data: Arc<GraphDataHandler>,
    precomputed: Arc<PrecomputedStatsHandler>,
    flight: Arc<Mutex<Flight>>,
}

impl GraphParamsHandler {
    pub fn new(
        store: Arc<dyn StorePort>,
        graph_data: Arc<GraphDataHandler>,
        precomputed: Arc<PrecomputedStatsHandler>,
    ) -> Self {
        Self {
            store,
            graph_data,
            precomputed,
            flight: Arc::new(Mutex::new(Flight {
                generation: 0,
                token: CancellationToken::new(),
            })),
        }
    }

    /// 需要在 tokio runtime 中调用
    pub fn handle(&self, cmd: UpdateGraphParamsCommand) -> Result<FetchTasks, ApplicationError> {
        cmd.patch.validate()?;

        // 合并、读回、换代与重置在同一次持锁内完成，并发调用按顺序生效
        let mut flight = self.flight.lock().unwrap_or_else(PoisonError::into_inner);

        self.store.dispatch(Action::ReceivedGraphParams { payload: cmd.patch });
        let params = self.store.graph_params();

        let (generation, token) = next_flight(&mut flight);
        let mut handles = Vec::new();

        if params.date().is_some() {
            let precomputed = self.precomputed.clone();
            let caches = self.store.stat_caches();
            let params = params.clone();
            handles.push(tokio::spawn(async move {
                precomputed.fetch_wait_and_trip_data(&params, &caches).await;
            }));
        }

        if params.has_stop_pair() {
            let interval_params = params.without_time_range();
            handles.push(self.spawn_metrics(
                MetricsEndpoint::Metrics,
                params.clone(),
                generation,
                token.clone(),
            ));
            handles.push(self.spawn_metrics(
                MetricsEndpoint::MetricsByInterval,
                interval_params,
                generation,
                token,
            ));
        } else {
            self.graph_data.reset_graph_data();
            self.graph_data.reset_interval_data();
        }
        drop(flight);

        tracing::info!(
            generation = generation,
            route_id = ?params.route_id(),
            direction_id = ?params.direction_id(),
            start_stop_id = ?params.start_stop_id(),
            end_stop_id = ?params.end_stop_id(),
            date = ?params.date(),
            tasks = handles.len(),
            "Graph params handled"
        );

        Ok(FetchTasks {
            generation,
            graph_params: params,
            handles,
        })
    }


    fn spawn_metrics(
        &self,
        endpoint: MetricsEndpoint,
        params: GraphParams,
        generation: u64,
        token: CancellationToken,
    ) -> JoinHandle<()> {
        let graph_data = self.graph_data.clone();
        let store = self.store.clone();
        let flight = self.flight.clone();

        tokio::spawn(async move {
            let action = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(generation, endpoint = endpoint.path(), "Metrics request cancelled");
                    return;
                }
                action = graph_data.request(endpoint, params) => action,
            };

            // 持锁派发，保证与 next_flight 互斥
            let current = flight.lock().unwrap_or_else(PoisonError::into_inner);
            if current.generation != generation {
                tracing::debug!(
                    generation,
                    current = current.generation,
                    action = action.name(),
                    "Dropping stale metrics outcome"
                );
                return;
            }
            store.dispatch(action);
        })
    }
}
