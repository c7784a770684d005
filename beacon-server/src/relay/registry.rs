use axum::extract::ws::Utf8Bytes;
use beacon_core::{PeerId, ServerEvent};
use dashmap::DashMap;
use tracing::{debug, error};

use crate::relay::connection::ConnectionHandle;

/// All live connections, keyed by assigned peer id.
///
/// Shared between the relay task and the per-socket receive tasks. The
/// relay task is the only structural writer; receive tasks merely flip the
/// liveness flag of their own entry. Room membership only ever refers to
/// ids present here, and the relay removes from both on the same turn.
#[derive(Debug)]
pub struct Registry {
    peers: DashMap<PeerId, ConnectionHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            peers: DashMap::new(),
        }
    }

    /// Register a connection under a fresh id and return it.
    pub fn insert(&self, handle: ConnectionHandle) -> PeerId {
        let peer_id = PeerId::new();
        self.peers.insert(peer_id.clone(), handle);
        peer_id
    }

    pub fn contains(&self, peer_id: &PeerId) -> bool {
        self.peers.contains_key(peer_id)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Serialize `event` and queue it for `peer_id`. `false` means the peer
    /// is unknown or its socket is gone; what that implies is the caller's
    /// business.
    pub fn send(&self, peer_id: &PeerId, event: &ServerEvent) -> bool {
        let Some(peer) = self.peers.get(peer_id) else {
            return false;
        };
        match serde_json::to_string(event) {
            Ok(json) => peer.send_text(json.into()),
            Err(e) => {
                error!("Failed to serialize event for {}: {}", peer_id, e);
                true
            }
        }
    }

    /// Queue `event` for every connection except `except`, returning the
    /// ids whose socket was already gone.
    pub fn broadcast_except(&self, except: &PeerId, event: &ServerEvent) -> Vec<PeerId> {
        let frame: Utf8Bytes = match serde_json::to_string(event) {
            Ok(json) => json.into(),
            Err(e) => {
                error!("Failed to serialize broadcast event: {}", e);
                return Vec::new();
            }
        };

        let mut dead = Vec::new();
        for entry in self.peers.iter() {
            if entry.key() == except {
                continue;
            }
            if !entry.value().send_text(frame.clone()) {
                dead.push(entry.key().clone());
            }
        }
        dead
    }

    /// Point-in-time view of every connected id, sorted for stable output.
    pub fn snapshot_ids(&self) -> Vec<PeerId> {
        let mut ids: Vec<PeerId> = self.peers.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Run one heartbeat pass: connections that never answered the previous
    /// probe are returned for eviction, everyone else is marked pending and
    /// pinged.
    pub fn begin_probe_cycle(&self) -> Vec<PeerId> {
        let mut stale = Vec::new();
        for entry in self.peers.iter() {
            if !entry.value().probe() {
                stale.push(entry.key().clone());
            }
        }
        stale
    }

    /// Record a probe acknowledgment for `peer_id`.
    pub fn mark_alive(&self, peer_id: &PeerId) {
        match self.peers.get(peer_id) {
            Some(peer) => peer.mark_alive(),
            None => debug!("Pong from unregistered connection {}", peer_id),
        }
    }

    /// Remove and return the handle. `None` when already gone, which makes
    /// every disconnect path idempotent.
    pub fn remove(&self, peer_id: &PeerId) -> Option<ConnectionHandle> {
        self.peers.remove(peer_id).map(|(_, handle)| handle)
    }

    /// Close every connection and forget them all.
    pub fn close_all(&self) {
        for entry in self.peers.iter() {
            entry.value().close();
        }
        self.peers.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
