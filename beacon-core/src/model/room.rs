use serde::{Deserialize, Serialize};
use std::fmt;

/// Room that carries public chat traffic and feeds the rolling history.
pub const PUBLIC_CHAT_ROOM: &str = "PublicChat";

/// Name of a room, compared case-sensitively. Rooms come into existence on
/// first join and are dropped once the last member leaves.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct RoomName(pub String);

impl RoomName {
    pub fn public_chat() -> Self {
        Self(PUBLIC_CHAT_ROOM.to_owned())
    }
}

impl From<&str> for RoomName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RoomName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
