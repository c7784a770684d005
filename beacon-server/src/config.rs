use std::time::Duration;

use beacon_core::CHAT_HISTORY_LIMIT;

/// Tunables for one relay instance.
///
/// The capability flags mirror the deployment variants this relay grew out
/// of: a bare signaling forwarder, one that answers presence and peer-list
/// queries, and one that additionally hosts the public chat room.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Time between heartbeat probe cycles.
    pub heartbeat_interval: Duration,
    /// Answer `presence-check` queries.
    pub presence: bool,
    /// Answer `list-peers` queries.
    pub peer_list: bool,
    /// Host the public chat room and keep its rolling history.
    pub chat: bool,
    /// Cap on the chat history buffer.
    pub chat_history_limit: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval: Duration::from_secs(30),
            presence: true,
            peer_list: true,
            chat: false,
            chat_history_limit: CHAT_HISTORY_LIMIT,
        }
    }
}
