mod chat;
mod peer;
mod room;
mod signaling;

pub use chat::{CHAT_HISTORY_LIMIT, ChatMessage};
pub use peer::PeerId;
pub use room::{PUBLIC_CHAT_ROOM, RoomName};
pub use signaling::{ClientMessage, ServerEvent};
