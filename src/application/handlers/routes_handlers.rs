//! Routes Handler - 拉取线路列表

use std::sync::Arc;

use crate::application::ports::{FetchError, ObjectStorePort, StorePort};
use crate::domain::{Action, TransportError};

pub struct RoutesHandler {
    object_store: Arc<dyn ObjectStorePort>,
    store: Arc<dyn StorePort>,
    routes_url: String,
}

impl RoutesHandler {
    pub fn new(
        object_store: Arc<dyn ObjectStorePort>,
        store: Arc<dyn StorePort>,
        routes_url: impl Into<String>,
    ) -> Self {
        Self {
            object_store,
            store,
            routes_url: routes_url.into(),
        }
    }

    /// 下载线路文档，派发 RECEIVED_ROUTES 或 RECEIVED_ROUTES_ERROR
    pub async fn fetch_routes(&self) {
        let result = self
            .object_store
            .get_json(&self.routes_url)
            .await
            .and_then(|mut document| match document.get_mut("routes").map(serde_json::Value::take) {
                Some(serde_json::Value::Array(routes)) => Ok(routes),
                _ => Err(FetchError::InvalidResponse(
                    "routes document has no routes array".to_string(),
                )),
            });

        let action = match result {
            Ok(routes) => {
                tracing::info!(url = %self.routes_url, count = routes.len(), "Routes received");
                Action::ReceivedRoutes { payload: routes }
            }
            Err(e) => {
                tracing::warn!(url = %self.routes_url, error = %e, "Failed to fetch routes");
                Action::ReceivedRoutesError {
                    payload: TransportError::from(&e),
                }
            }
        };

        self.store.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeObjectStore;
    use crate::infrastructure::events::EventPublisher;
    use crate::infrastructure::memory::InMemoryStore;
    use serde_json::json;

    const ROUTES_URL: &str = "https://bucket.test/routes_v2_sf-muni.json.gz";

    fn setup(object_store: FakeObjectStore) -> (RoutesHandler, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new(Arc::new(EventPublisher::new())));
        let handler = RoutesHandler::new(Arc::new(object_store), store.clone(), ROUTES_URL);
        (handler, store)
    }

    #[tokio::test]
    async fn test_routes_received() {
        let document = json!({"version": "v2", "routes": [{"id": "12"}, {"id": "N"}]});
        let (handler, store) = setup(FakeObjectStore::new().with_document(ROUTES_URL, document));

        handler.fetch_routes().await;

        let routes = store.snapshot().routes.unwrap();
        assert_eq!(routes, vec![json!({"id": "12"}), json!({"id": "N"})]);
    }

    #[tokio::test]
    async fn test_routes_error_carries_transport_error() {
        let (handler, store) = setup(FakeObjectStore::new().with_failure(
            ROUTES_URL,
            FetchError::Http {
                status: 403,
                body: "AccessDenied".to_string(),
            },
        ));

        handler.fetch_routes().await;

        let state = store.snapshot();
        assert!(state.routes.is_none());
        let error = state.routes_error.unwrap();
        assert_eq!(error.kind, "http");
        assert_eq!(error.status, Some(403));
        assert_eq!(error.message, "Request failed with status code 403");
    }

    #[tokio::test]
    async fn test_document_without_routes_is_error() {
        let (handler, store) =
            setup(FakeObjectStore::new().with_document(ROUTES_URL, json!({"stops": []})));

        handler.fetch_routes().await;

        assert_eq!(
            store.snapshot().routes_error.map(|e| e.kind),
            Some("invalid_response".to_string())
        );
    }
}
