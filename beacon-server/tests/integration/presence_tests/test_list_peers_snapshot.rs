use beacon_core::{ClientMessage, ServerEvent};
use beacon_server::RelayConfig;

use crate::utils::TestPeer;
use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_list_peers_snapshot() {
    init_tracing();

    let (relay, _relay_task) = create_test_relay(RelayConfig::default());

    let mut alice = TestPeer::connect(&relay).await;
    let bob = TestPeer::connect(&relay).await;
    let carol = TestPeer::connect(&relay).await;

    alice.send(&relay, &ClientMessage::ListPeers).await;

    let mut expected = vec![
        alice.peer_id.clone(),
        bob.peer_id.clone(),
        carol.peer_id.clone(),
    ];
    expected.sort();
    assert_eq!(
        alice.next_event().await,
        Some(ServerEvent::PeerList { peers: expected })
    );

    relay.disconnect(carol.peer_id.clone()).await;

    alice.send(&relay, &ClientMessage::ListPeers).await;
    let mut expected = vec![alice.peer_id.clone(), bob.peer_id.clone()];
    expected.sort();
    assert_eq!(
        alice.next_event().await,
        Some(ServerEvent::PeerList { peers: expected })
    );
}
