use std::time::Duration;

use beacon_server::RelayConfig;

use crate::utils::TestPeer;
use crate::{create_test_relay, init_tracing, settle};

#[tokio::test(start_paused = true)]
async fn test_responsive_connection_survives() {
    init_tracing();

    let (relay, _relay_task) = create_test_relay(RelayConfig::default());
    settle().await;

    let mut alice = TestPeer::connect(&relay).await;
    let mut bob = TestPeer::connect(&relay).await;
    alice.join(&relay, "lobby").await;
    bob.join(&relay, "lobby").await;
    assert!(alice.next_event().await.is_some()); // bob joined

    // answer every probe; a pong always lands before the next cycle
    for _ in 0..3 {
        tokio::time::advance(Duration::from_secs(31)).await;
        alice.expect_ping().await;
        relay.pong(&alice.peer_id);
        bob.expect_ping().await;
        relay.pong(&bob.peer_id);
    }

    assert!(relay.is_online(&alice.peer_id));
    assert!(relay.is_online(&bob.peer_id));
    assert_eq!(relay.connection_count(), 2);
    alice.expect_silence().await;
    bob.expect_silence().await;
}
