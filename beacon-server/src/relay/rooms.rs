use std::collections::{HashMap, HashSet};

use beacon_core::{PeerId, RoomName};

/// Bidirectional index between rooms and their members.
///
/// Owned by the relay task. Both directions are updated together so that
/// disconnect cleanup can enumerate a peer's rooms without scanning, and
/// routing can enumerate a room's members without touching connections.
/// Rooms exist exactly as long as they have members.
#[derive(Debug, Default)]
pub struct RoomIndex {
    members: HashMap<RoomName, HashSet<PeerId>>,
    joined: HashMap<PeerId, HashSet<RoomName>>,
}

impl RoomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `peer_id` to `room`, creating the room on first join. Returns
    /// `false` when the peer was already a member.
    pub fn join(&mut self, room: RoomName, peer_id: PeerId) -> bool {
        let inserted = self
            .members
            .entry(room.clone())
            .or_default()
            .insert(peer_id.clone());
        if inserted {
            self.joined.entry(peer_id).or_default().insert(room);
        }
        inserted
    }

    /// Remove `peer_id` from every room it belongs to, reaping rooms left
    /// empty. Returns the rooms it actually left.
    pub fn leave_all(&mut self, peer_id: &PeerId) -> Vec<RoomName> {
        let Some(rooms) = self.joined.remove(peer_id) else {
            return Vec::new();
        };

        let mut left = Vec::with_capacity(rooms.len());
        for room in rooms {
            if let Some(members) = self.members.get_mut(&room) {
                members.remove(peer_id);
                if members.is_empty() {
                    self.members.remove(&room);
                }
            }
            left.push(room);
        }
        left
    }

    /// Every member of `room`; empty when the room does not exist.
    pub fn members(&self, room: &RoomName) -> Vec<PeerId> {
        self.members
            .get(room)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Members of `room` other than `excluded`.
    pub fn members_except(&self, room: &RoomName, excluded: &PeerId) -> Vec<PeerId> {
        self.members
            .get(room)
            .map(|members| {
                members
                    .iter()
                    .filter(|member| *member != excluded)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Rooms `peer_id` currently belongs to.
    pub fn rooms_of(&self, peer_id: &PeerId) -> Vec<RoomName> {
        self.joined
            .get(peer_id)
            .map(|rooms| rooms.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of rooms that currently have members.
    pub fn room_count(&self) -> usize {
        self.members.len()
    }
}
