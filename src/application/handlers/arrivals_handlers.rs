//! Arrivals Handler - 到站历史
//!
//! 下载失败只记录日志，不派发事件

use std::sync::Arc;

use crate::application::commands::FetchArrivalsCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{ObjectStorePort, StorePort};
use crate::domain::{parse_service_date, Action, ObjectStoreLayout};

pub struct ArrivalsHandler {
    object_store: Arc<dyn ObjectStorePort>,
    store: Arc<dyn StorePort>,
    layout: ObjectStoreLayout,
}

impl ArrivalsHandler {
    pub fn new(
        object_store: Arc<dyn ObjectStorePort>,
        store: Arc<dyn StorePort>,
        layout: ObjectStoreLayout,
    ) -> Self {
        Self {
            object_store,
            store,
            layout,
        }
    }

    /// 返回是否成功收到数据
    pub async fn handle(&self, cmd: FetchArrivalsCommand) -> Result<bool, ApplicationError> {
        parse_service_date(&cmd.date)?;
        if cmd.route_id.is_empty() {
            return Err(ApplicationError::validation("route_id cannot be empty"));
        }

        let url = self.layout.arrivals_url(&cmd.date, &cmd.route_id);
        tracing::debug!(url = %url, "Fetching arrivals");

        match self.object_store.get_json(&url).await {
            Ok(data) => {
                tracing::info!(date = %cmd.date, route_id = %cmd.route_id, "Arrivals received");
                self.store.dispatch(Action::ReceivedArrivals {
                    payload: (Arc::new(data), cmd.date, cmd.route_id),
                });
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to fetch arrivals");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeObjectStore;
    use crate::infrastructure::events::EventPublisher;
    use crate::infrastructure::memory::InMemoryStore;
    use serde_json::json;

    fn setup(object_store: FakeObjectStore) -> (ArrivalsHandler, Arc<InMemoryStore>, Arc<FakeObjectStore>) {
        let object_store = Arc::new(object_store);
        let store = Arc::new(InMemoryStore::new(Arc::new(EventPublisher::new())));
        let handler = ArrivalsHandler::new(
            object_store.clone(),
            store.clone(),
            ObjectStoreLayout::default(),
        );
        (handler, store, object_store)
    }

    fn command(date: &str, route_id: &str) -> FetchArrivalsCommand {
        FetchArrivalsCommand {
            date: date.to_string(),
            route_id: route_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_arrivals_received() {
        let url = ObjectStoreLayout::default().arrivals_url("2023-05-01", "12");
        let (handler, store, _) = setup(
            FakeObjectStore::new().with_document(&url, json!({"stops": {"4970": {}}})),
        );

        let received = handler.handle(command("2023-05-01", "12")).await.unwrap();
        assert!(received);

        let arrivals = store.snapshot().arrivals.unwrap();
        assert_eq!(arrivals.date, "2023-05-01");
        assert_eq!(arrivals.route_id, "12");
        assert_eq!(*arrivals.data, json!({"stops": {"4970": {}}}));
    }

    #[tokio::test]
    async fn test_failure_is_silent() {
        let (handler, store, object_store) = setup(FakeObjectStore::new());

        let received = handler.handle(command("2023-05-01", "12")).await.unwrap();
        assert!(!received);
        assert!(store.snapshot().arrivals.is_none());
        assert_eq!(object_store.request_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_command_is_rejected() {
        let (handler, _, object_store) = setup(FakeObjectStore::new());

        assert!(handler.handle(command("05/01/2023", "12")).await.is_err());
        assert!(handler.handle(command("2023-05-01", "")).await.is_err());
        assert_eq!(object_store.request_count(), 0);
    }
}
