//! Application State
//!
//! 包含所有 Handler 的应用状态

use std::sync::Arc;

use crate::application::{
    ArrivalsHandler, GraphDataHandler, GraphParamsHandler, MetricsApiPort, ObjectStorePort,
    PrecomputedStatsHandler, RoutesHandler, SpiderMapHandler, StorePort,
};
use crate::domain::ObjectStoreLayout;
use crate::infrastructure::events::EventPublisher;

/// 对象存储相关设置
#[derive(Debug, Clone, Default)]
pub struct ObjectStoreSettings {
    pub layout: ObjectStoreLayout,
    pub routes_url: String,
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub store: Arc<dyn StorePort>,
    pub event_publisher: Arc<EventPublisher>,

    // ========== Handlers ==========
    pub graph_params_handler: GraphParamsHandler,
    pub routes_handler: RoutesHandler,
    pub arrivals_handler: ArrivalsHandler,
    pub spider_map_handler: SpiderMapHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        metrics_api: Arc<dyn MetricsApiPort>,
        object_store: Arc<dyn ObjectStorePort>,
        store: Arc<dyn StorePort>,
        event_publisher: Arc<EventPublisher>,
        settings: ObjectStoreSettings,
    ) -> Self {
        let graph_data = Arc::new(GraphDataHandler::new(metrics_api, store.clone()));
        let precomputed = Arc::new(PrecomputedStatsHandler::new(
            object_store.clone(),
            store.clone(),
            settings.layout.clone(),
        ));

        Self {
            store: store.clone(),
            event_publisher,

            graph_params_handler: GraphParamsHandler::new(store.clone(), graph_data, precomputed),
            routes_handler: RoutesHandler::new(
                object_store.clone(),
                store.clone(),
                settings.routes_url,
            ),
            arrivals_handler: ArrivalsHandler::new(object_store, store.clone(), settings.layout),
            spider_map_handler: SpiderMapHandler::new(store),
        }
    }
}
