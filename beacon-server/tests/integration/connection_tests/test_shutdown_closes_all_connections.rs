use beacon_server::RelayConfig;

use crate::utils::TestPeer;
use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_shutdown_closes_all_connections() {
    init_tracing();

    let (relay, relay_task) = create_test_relay(RelayConfig::default());

    let mut alice = TestPeer::connect(&relay).await;
    let mut bob = TestPeer::connect(&relay).await;

    relay.shutdown().await;
    relay_task.await.expect("Relay task should finish cleanly");

    alice.expect_close().await;
    bob.expect_close().await;
}
