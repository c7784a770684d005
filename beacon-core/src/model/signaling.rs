use crate::model::chat::ChatMessage;
use crate::model::peer::PeerId;
use crate::model::room::RoomName;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a client sends to the relay: one JSON object per WebSocket text
/// frame, discriminated by its `event` field. Routing fields live at the top
/// level of the object; `signalData` is never interpreted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Enter a room, creating it on first use. Existing members are told
    /// through `peer-joined`.
    Join { room: RoomName },

    /// Alternate join form used by clients that also self-report an id.
    /// The relay trusts only the id it assigned to the connection.
    JoinRoom {
        room_name: RoomName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        peer_id: Option<PeerId>,
    },

    /// Forward `signal_data` to one peer (`to`), to a room, or, with
    /// neither given, to every other connection.
    Signal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<PeerId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        room: Option<RoomName>,
        /// Application tag ("offer", "answer", "candidate", ...). Logged,
        /// never interpreted.
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        signal_data: Value,
    },

    /// Ask whether `peer_id` currently has a live connection.
    PresenceCheck { peer_id: PeerId },

    /// Ask for a snapshot of all connected peer ids.
    ListPeers,

    /// Post to the public chat room. All three fields are required; an
    /// incomplete message is dropped without an error to the sender.
    PublicMessage {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<u64>,
    },
}

/// Frames the relay sends to a client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// First frame on every connection: the id the relay assigned to it.
    Welcome { peer_id: PeerId },

    /// Another peer entered one of this connection's rooms.
    PeerJoined { peer_id: PeerId },

    /// A peer left every room it shared with this connection (disconnect or
    /// eviction).
    PeerLeft { peer_id: PeerId },

    /// Relayed signaling payload, stamped with the sender's id.
    Signal { from: PeerId, signal_data: Value },

    /// Answer to `presence-check`, sent to the asking connection only.
    PresenceResponse { peer_id: PeerId, is_online: bool },

    /// Answer to `list-peers`: every connected id, sorted.
    PeerList { peers: Vec<PeerId> },

    /// Rolling public-chat history, delivered on joining the public room.
    ChatHistory { messages: Vec<ChatMessage> },

    /// One public chat message fanned out to the public room.
    PublicMessage {
        from: String,
        text: String,
        timestamp: u64,
    },
}
