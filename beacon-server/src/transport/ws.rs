use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::relay::RelayHandle;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(relay): State<RelayHandle>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, relay))
}

async fn handle_socket(socket: WebSocket, relay: RelayHandle) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let Some(peer_id) = relay.connect(tx).await else {
        warn!("Relay unavailable, dropping new connection");
        return;
    };
    info!("New WebSocket connection: {}", peer_id);

    // pump: everything the relay queues goes out on the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay = relay.clone();
        let peer_id = peer_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => relay.deliver(peer_id.clone(), text).await,
                    // pongs answer heartbeat probes and bypass the queue
                    Message::Pong(_) => relay.pong(&peer_id),
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    // whichever half dies first takes the other one with it
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    relay.disconnect(peer_id.clone()).await;
    info!("WebSocket disconnected: {}", peer_id);
}
