pub mod utils;

pub mod chat_tests;

use beacon_server::{Relay, RelayConfig, RelayHandle};
use tokio::task::JoinHandle;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_relay(config: RelayConfig) -> (RelayHandle, JoinHandle<()>) {
    let (relay, handle) = Relay::new(config);
    let relay_task = tokio::spawn(relay.run());
    (handle, relay_task)
}

/// Let the relay drain whatever commands are already queued.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
