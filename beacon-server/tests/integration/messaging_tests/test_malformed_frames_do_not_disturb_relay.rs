use beacon_core::{ClientMessage, ServerEvent};
use beacon_server::RelayConfig;
use serde_json::json;

use crate::utils::TestPeer;
use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_malformed_frames_do_not_disturb_relay() {
    init_tracing();

    let (relay, _relay_task) = create_test_relay(RelayConfig::default());

    let mut alice = TestPeer::connect(&relay).await;
    let mut bob = TestPeer::connect(&relay).await;

    alice.send_raw(&relay, "this is not json").await;
    alice.send_raw(&relay, r#"{"event":"launch-missiles"}"#).await;
    alice.send_raw(&relay, r#"{"event":"signal","to":12}"#).await;

    // no error frame goes back, nobody else hears anything
    alice.expect_silence().await;
    bob.expect_silence().await;
    assert!(relay.is_online(&alice.peer_id));
    assert!(relay.is_online(&bob.peer_id));

    // and routing still works afterwards
    alice
        .send(
            &relay,
            &ClientMessage::Signal {
                to: Some(bob.peer_id.clone()),
                room: None,
                kind: None,
                signal_data: json!({ "still": "here" }),
            },
        )
        .await;
    assert_eq!(
        bob.next_event().await,
        Some(ServerEvent::Signal {
            from: alice.peer_id.clone(),
            signal_data: json!({ "still": "here" }),
        })
    );
}
