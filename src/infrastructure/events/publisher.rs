//! Event Publisher Implementation
//!
//! 所有派发的 Action 通过 broadcast 通道推送给 WebSocket 订阅者

use std::sync::Arc;
use tokio::sync::broadcast;

use crate::domain::Action;

/// 广播通道容量
const CHANNEL_CAPACITY: usize = 256;

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<Action>,
}

impl EventPublisher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅后续派发的 Action
    pub fn subscribe(&self) -> broadcast::Receiver<Action> {
        self.channel.subscribe()
    }

    /// 当前订阅者数量
    pub fn receiver_count(&self) -> usize {
        self.channel.receiver_count()
    }

    pub fn publish(&self, action: Action) {
        let name = action.name();
        if let Err(e) = self.channel.send(action) {
            tracing::debug!(
                action = name,
                error = %e,
                "Failed to publish action (no receivers)"
            );
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}
