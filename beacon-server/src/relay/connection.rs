use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::ws::{Message, Utf8Bytes};
use bytes::Bytes;
use tokio::sync::mpsc;

/// Registry-side handle to one accepted connection.
///
/// Holds the queue drained by the socket's send pump plus the liveness flag
/// the heartbeat cycle reads. The flag is flipped back to alive straight
/// from the socket's receive task when a pong arrives, so an acknowledgment
/// counts no matter where the probe cycle currently stands.
#[derive(Debug)]
pub struct ConnectionHandle {
    outbound: mpsc::UnboundedSender<Message>,
    alive: AtomicBool,
}

impl ConnectionHandle {
    pub fn new(outbound: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            outbound,
            alive: AtomicBool::new(true),
        }
    }

    /// Queue a text frame. `false` means the socket's send pump is gone and
    /// the connection should be treated as disconnected.
    pub fn send_text(&self, frame: Utf8Bytes) -> bool {
        self.outbound.send(Message::Text(frame)).is_ok()
    }

    /// Mark the connection as having answered the current probe.
    pub fn mark_alive(&self) {
        self.alive.store(true, Ordering::Relaxed);
    }

    /// Open a new probe: report whether the previous one was answered and,
    /// if so, mark the connection pending and queue a ping. A connection
    /// that never answered gets no further pings; it is about to go.
    pub fn probe(&self) -> bool {
        let was_alive = self.alive.swap(false, Ordering::Relaxed);
        if was_alive {
            let _ = self.outbound.send(Message::Ping(Bytes::new()));
        }
        was_alive
    }

    /// Queue a close frame; dropping the handle ends the send pump.
    pub fn close(&self) {
        let _ = self.outbound.send(Message::Close(None));
    }
}
