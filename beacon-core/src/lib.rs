pub mod model;

pub use model::{
    CHAT_HISTORY_LIMIT, ChatMessage, ClientMessage, PUBLIC_CHAT_ROOM, PeerId, RoomName,
    ServerEvent,
};
