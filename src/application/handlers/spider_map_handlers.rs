//! Spider Map Handler - 蜘蛛图点击

use std::sync::Arc;

use crate::application::commands::SpiderMapClickCommand;
use crate::application::ports::StorePort;
use crate::domain::Action;

pub struct SpiderMapHandler {
    store: Arc<dyn StorePort>,
}

impl SpiderMapHandler {
    pub fn new(store: Arc<dyn StorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: SpiderMapClickCommand) {
        tracing::debug!(
            stops = cmd.stops.len(),
            lat = cmd.lat_lng.lat,
            lng = cmd.lat_lng.lng,
            "Spider map click"
        );
        self.store.dispatch(Action::ReceivedSpiderMapClick {
            payload: (cmd.stops, cmd.lat_lng),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LatLng;
    use crate::infrastructure::events::EventPublisher;
    use crate::infrastructure::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn test_click_recorded() {
        let store = Arc::new(InMemoryStore::new(Arc::new(EventPublisher::new())));
        let handler = SpiderMapHandler::new(store.clone());

        handler.handle(SpiderMapClickCommand {
            stops: vec![json!({"routeId": "12", "stopId": "4970"})],
            lat_lng: LatLng {
                lat: 37.7749,
                lng: -122.4194,
            },
        });

        let selection = store.snapshot().spider_selection.unwrap();
        assert_eq!(selection.stops.len(), 1);
        assert_eq!(selection.lat_lng.lng, -122.4194);
    }
}
