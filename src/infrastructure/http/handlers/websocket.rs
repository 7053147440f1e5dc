//! WebSocket Handler - Action 事件流

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::infrastructure::http::state::AppState;

/// 订阅所有派发的 Action
pub async fn events_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_events_socket(socket, state))
}

async fn handle_events_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let connection_id = Uuid::new_v4();

    let mut event_rx = state.event_publisher.subscribe();

    tracing::info!(
        connection_id = %connection_id,
        subscribers = state.event_publisher.receiver_count(),
        "Events WebSocket connected"
    );

    // 事件转发任务
    let forward_task = tokio::spawn(async move {
        loop {
            let action = match event_rx.recv().await {
                Ok(action) => action,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        connection_id = %connection_id,
                        skipped = skipped,
                        "Events WebSocket lagging, actions skipped"
                    );
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let msg = match serde_json::to_string(&action) {
                Ok(json) => Message::Text(json),
                Err(e) => {
                    tracing::error!(error = %e, action = action.name(), "Failed to serialize action");
                    continue;
                }
            };

            if let Err(e) = sender.send(msg).await {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "Failed to send WebSocket message"
                );
                break;
            }
        }
    });

    // 接收客户端消息（心跳）
    let receive_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    tracing::info!(connection_id = %connection_id, "Events WebSocket closed by client");
                    break;
                }
                Err(e) => {
                    tracing::debug!(connection_id = %connection_id, error = %e, "Events WebSocket error");
                    break;
                }
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = forward_task => {}
        _ = receive_task => {}
    }

    tracing::info!(connection_id = %connection_id, "Events WebSocket disconnected");
}
