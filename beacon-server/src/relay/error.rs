use beacon_core::PeerId;
use thiserror::Error;

/// Why an inbound frame was dropped instead of routed. None of these are
/// reported back to the sender; they only shape the server-side log line.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The frame was not a single well-formed message object.
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The sending connection is no longer registered; its eviction raced
    /// the inbound queue.
    #[error("sender {0} is not registered")]
    UnknownSender(PeerId),

    /// The message targets a capability this relay runs without.
    #[error("{0} capability is disabled")]
    Disabled(&'static str),

    /// A public chat message missing one of `from`, `text`, `timestamp`.
    #[error("incomplete chat message")]
    IncompleteChatMessage,
}
