//! WebSocket stream of one-shot user notifications

use axum::extract::ws::{Message, WebSocket};
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::state::AppState;

/// GET /api/v1/notifications/ws
///
/// Upgrades the connection and streams notifications as JSON objects.
/// Display policy (one visible at a time, auto-dismiss after the carried
/// duration) is the client's concern.
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    info!("Notification client connected");

    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.notifier.subscribe();

    let send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(notification) => {
                    let json = match serde_json::to_string(&notification) {
                        Ok(j) => j,
                        Err(e) => {
                            warn!(error = %e, "Failed to serialize notification");
                            continue;
                        }
                    };
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        // Client disconnected
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    warn!(lagged = count, "Notification receiver lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => break,
                Ok(_) => {} // Ignore other messages
                Err(_) => break,
            }
        }
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    info!("Notification client disconnected");
}
