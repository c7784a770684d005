//! WebSocket signaling relay for WebRTC peers.
//!
//! A single relay task owns the connection registry, room membership and
//! message routing; the transport layer feeds it through [`RelayHandle`].

pub mod config;
pub mod relay;
pub mod transport;

pub use config::RelayConfig;
pub use relay::{Relay, RelayHandle};
pub use transport::app;
