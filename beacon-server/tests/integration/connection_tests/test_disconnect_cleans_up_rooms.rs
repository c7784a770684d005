use beacon_core::ServerEvent;
use beacon_server::RelayConfig;

use crate::utils::TestPeer;
use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_disconnect_cleans_up_rooms() {
    init_tracing();

    let (relay, _relay_task) = create_test_relay(RelayConfig::default());

    let mut alice = TestPeer::connect(&relay).await;
    let mut bob = TestPeer::connect(&relay).await;
    let mut carol = TestPeer::connect(&relay).await;

    alice.join(&relay, "lobby").await;
    bob.join(&relay, "lobby").await;
    carol.join(&relay, "lobby").await;

    // drain the join notifications: alice sees two, bob sees one
    assert!(alice.next_event().await.is_some());
    assert!(alice.next_event().await.is_some());
    assert!(bob.next_event().await.is_some());

    relay.disconnect(bob.peer_id.clone()).await;

    let expected = ServerEvent::PeerLeft {
        peer_id: bob.peer_id.clone(),
    };
    assert_eq!(alice.next_event().await, Some(expected.clone()));
    assert_eq!(carol.next_event().await, Some(expected));
    bob.expect_close().await;

    // a repeated report of the same closure must notify nobody
    relay.disconnect(bob.peer_id.clone()).await;
    alice.expect_silence().await;
    carol.expect_silence().await;

    assert!(!relay.is_online(&bob.peer_id));
    assert_eq!(relay.connection_count(), 2);
}
