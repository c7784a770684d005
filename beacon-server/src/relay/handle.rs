use std::sync::Arc;

use axum::extract::ws::{Message, Utf8Bytes};
use beacon_core::PeerId;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::relay::command::RelayCommand;
use crate::relay::registry::Registry;

/// Cloneable facade over the relay task. The transport layer registers
/// sockets, feeds inbound frames and reports closures through it.
#[derive(Debug, Clone)]
pub struct RelayHandle {
    registry: Arc<Registry>,
    commands: mpsc::Sender<RelayCommand>,
}

impl RelayHandle {
    pub(crate) fn new(registry: Arc<Registry>, commands: mpsc::Sender<RelayCommand>) -> Self {
        Self { registry, commands }
    }

    /// Hand a freshly accepted socket to the relay. Returns the assigned
    /// peer id, or `None` when the relay is shutting down.
    pub async fn connect(&self, outbound: mpsc::UnboundedSender<Message>) -> Option<PeerId> {
        let (reply, assigned) = oneshot::channel();
        self.commands
            .send(RelayCommand::Connect { outbound, reply })
            .await
            .ok()?;
        assigned.await.ok()
    }

    /// Forward one inbound text frame from `from`.
    pub async fn deliver(&self, from: PeerId, frame: Utf8Bytes) {
        if let Err(e) = self.commands.send(RelayCommand::Inbound { from, frame }).await {
            warn!("Relay is gone, dropping inbound frame: {}", e);
        }
    }

    /// Report that the connection's socket closed or failed.
    pub async fn disconnect(&self, peer_id: PeerId) {
        let _ = self.commands.send(RelayCommand::Disconnect { peer_id }).await;
    }

    /// Record a heartbeat acknowledgment. Writes the liveness flag directly
    /// rather than queueing a command, so the answer lands no matter how
    /// far the probe cycle has moved on.
    pub fn pong(&self, peer_id: &PeerId) {
        self.registry.mark_alive(peer_id);
    }

    /// Whether `peer_id` currently has a live connection.
    pub fn is_online(&self, peer_id: &PeerId) -> bool {
        self.registry.contains(peer_id)
    }

    /// Number of currently registered connections.
    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    /// Ask the relay to stop and close every connection.
    pub async fn shutdown(&self) {
        let _ = self.commands.send(RelayCommand::Shutdown).await;
    }
}
