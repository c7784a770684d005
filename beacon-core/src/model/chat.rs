use serde::{Deserialize, Serialize};

/// Upper bound on public-chat messages kept in the rolling history buffer.
pub const CHAT_HISTORY_LIMIT: usize = 1008;

/// One public chat message. `from` is whatever name the sender reported and
/// `timestamp` is sender-side milliseconds; the relay only checks that the
/// fields are present and forwards them untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub from: String,
    pub text: String,
    pub timestamp: u64,
}
