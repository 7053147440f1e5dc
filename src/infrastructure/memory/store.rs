//! In-Memory Store Implementation

use std::sync::{Arc, PoisonError, RwLock};

use crate::application::ports::StorePort;
use crate::domain::{Action, GraphParams, RoutesState, StatCaches};
use crate::infrastructure::events::EventPublisher;

/// 内存状态存储
///
/// 派发时先经 reducer 更新状态，再广播给订阅者
pub struct InMemoryStore {
    state: RwLock<RoutesState>,
    publisher: Arc<EventPublisher>,
}

impl InMemoryStore {
    pub fn new(publisher: Arc<EventPublisher>) -> Self {
        Self::with_state(RoutesState::default(), publisher)
    }

    pub fn with_state(state: RoutesState, publisher: Arc<EventPublisher>) -> Self {
        Self {
            state: RwLock::new(state),
            publisher,
        }
    }
}

impl StorePort for InMemoryStore {
    fn dispatch(&self, action: Action) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.apply(&action);
        }
        tracing::debug!(action = action.name(), "Action dispatched");
        self.publisher.publish(action);
    }

    fn snapshot(&self) -> RoutesState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn graph_params(&self) -> GraphParams {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .graph_params
            .clone()
    }

    fn stat_caches(&self) -> StatCaches {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .stat_caches
            .clone()
    }
}
