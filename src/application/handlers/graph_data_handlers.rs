//! Graph / Interval Data Handlers
//!
//! 请求 metrics API，结果以 RECEIVED_*_DATA / RECEIVED_*_ERROR 派发

use std::sync::Arc;

use crate::application::ports::{MetricsApiPort, MetricsEndpoint, StorePort};
use crate::domain::{Action, GraphParams};

pub struct GraphDataHandler {
    metrics_api: Arc<dyn MetricsApiPort>,
    store: Arc<dyn StorePort>,
}

impl GraphDataHandler {
    pub fn new(metrics_api: Arc<dyn MetricsApiPort>, store: Arc<dyn StorePort>) -> Self {
        Self { metrics_api, store }
    }

    pub async fn fetch_graph_data(&self, params: GraphParams) {
        let action = self.request(MetricsEndpoint::Metrics, params).await;
        self.store.dispatch(action);
    }

    pub async fn fetch_interval_data(&self, params: GraphParams) {
        let action = self.request(MetricsEndpoint::MetricsByInterval, params).await;
        self.store.dispatch(action);
    }

    pub fn reset_graph_data(&self) {
        self.store.dispatch(Action::ResetGraphData { payload: () });
    }

    pub fn reset_interval_data(&self) {
        self.store.dispatch(Action::ResetIntervalData { payload: () });
    }

    /// 执行请求并返回终态 Action（不派发）
    pub async fn request(&self, endpoint: MetricsEndpoint, params: GraphParams) -> Action {
        match self.metrics_api.fetch(endpoint, &params).await {
            Ok(payload) => {
                tracing::info!(
                    endpoint = endpoint.path(),
                    route_id = ?params.route_id(),
                    date = ?params.date(),
                    "Metrics received"
                );
                match endpoint {
                    MetricsEndpoint::Metrics => Action::ReceivedGraphData {
                        payload,
                        graph_params: params,
                    },
                    MetricsEndpoint::MetricsByInterval => Action::ReceivedIntervalData {
                        payload,
                        graph_params: params,
                    },
                }
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(
                    endpoint = endpoint.path(),
                    error = %e,
                    message = %message,
                    "Metrics request failed"
                );
                match endpoint {
                    MetricsEndpoint::Metrics => Action::ReceivedGraphError { payload: message },
                    MetricsEndpoint::MetricsByInterval => {
                        Action::ReceivedIntervalError { payload: message }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FetchError;
    use crate::infrastructure::adapters::FakeMetricsApi;
    use crate::infrastructure::events::EventPublisher;
    use crate::infrastructure::memory::InMemoryStore;
    use serde_json::json;

    fn setup(api: FakeMetricsApi) -> (GraphDataHandler, Arc<InMemoryStore>, Arc<FakeMetricsApi>) {
        let api = Arc::new(api);
        let store = Arc::new(InMemoryStore::new(Arc::new(EventPublisher::new())));
        let handler = GraphDataHandler::new(api.clone(), store.clone());
        (handler, store, api)
    }

    #[tokio::test]
    async fn test_graph_data_success() {
        let (handler, store, api) = setup(
            FakeMetricsApi::new().with_response(MetricsEndpoint::Metrics, Ok(json!({"ok": 1}))),
        );
        let params = GraphParams {
            route_id: Some("12".to_string()),
            ..Default::default()
        };

        handler.fetch_graph_data(params.clone()).await;

        assert_eq!(store.snapshot().graph_data, Some(json!({"ok": 1})));
        assert_eq!(api.requests(), vec![(MetricsEndpoint::Metrics, params)]);
    }

    #[tokio::test]
    async fn test_server_error_string_becomes_payload() {
        let (handler, _, _) = setup(FakeMetricsApi::new().with_response(
            MetricsEndpoint::Metrics,
            Err(FetchError::Http {
                status: 400,
                body: r#"{"error": "X"}"#.to_string(),
            }),
        ));

        let action = handler
            .request(MetricsEndpoint::Metrics, GraphParams::default())
            .await;
        assert_eq!(
            action,
            Action::ReceivedGraphError {
                payload: "X".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_error_message_becomes_payload() {
        let err = FetchError::Network("connection refused".to_string());
        let (handler, store, _) = setup(
            FakeMetricsApi::new()
                .with_response(MetricsEndpoint::MetricsByInterval, Err(err.clone())),
        );

        handler.fetch_interval_data(GraphParams::default()).await;

        assert_eq!(store.snapshot().interval_error, Some(err.to_string()));
    }

    #[tokio::test]
    async fn test_reset_clears_state() {
        let (handler, store, _) = setup(FakeMetricsApi::new());
        handler.fetch_graph_data(GraphParams::default()).await;
        assert!(store.snapshot().graph_data.is_some());

        handler.reset_graph_data();
        assert!(store.snapshot().graph_data.is_none());
    }
}
