use axum::extract::ws::{Message, Utf8Bytes};
use beacon_core::PeerId;
use tokio::sync::{mpsc, oneshot};

/// Commands feeding the relay's event loop from the transport layer.
#[derive(Debug)]
pub enum RelayCommand {
    /// A freshly accepted socket: register it and report the assigned id.
    Connect {
        outbound: mpsc::UnboundedSender<Message>,
        reply: oneshot::Sender<PeerId>,
    },
    /// One inbound text frame from a registered connection.
    Inbound { from: PeerId, frame: Utf8Bytes },
    /// The connection's socket closed or failed.
    Disconnect { peer_id: PeerId },
    /// Stop the event loop and close every connection.
    Shutdown,
}
