use beacon_core::{ClientMessage, PUBLIC_CHAT_ROOM, ServerEvent};
use beacon_server::RelayConfig;

use crate::utils::TestPeer;
use crate::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_public_room_echo() {
    init_tracing();

    let (relay, _relay_task) = create_test_relay(RelayConfig {
        chat: true,
        ..RelayConfig::default()
    });

    let mut alice = TestPeer::connect(&relay).await;
    let mut bob = TestPeer::connect(&relay).await;
    let mut carol = TestPeer::connect(&relay).await;

    alice.join(&relay, PUBLIC_CHAT_ROOM).await;
    bob.join(&relay, PUBLIC_CHAT_ROOM).await;
    assert!(alice.next_event().await.is_some()); // bob joined

    alice
        .send(
            &relay,
            &ClientMessage::PublicMessage {
                from: Some("alice".to_owned()),
                text: Some("hi all".to_owned()),
                timestamp: Some(42),
            },
        )
        .await;

    // the author gets the echo too; outsiders hear nothing
    let expected = ServerEvent::PublicMessage {
        from: "alice".to_owned(),
        text: "hi all".to_owned(),
        timestamp: 42,
    };
    assert_eq!(alice.next_event().await, Some(expected.clone()));
    assert_eq!(bob.next_event().await, Some(expected));
    carol.expect_silence().await;

    // a message missing its timestamp is dropped without a trace
    alice
        .send(
            &relay,
            &ClientMessage::PublicMessage {
                from: Some("alice".to_owned()),
                text: Some("half a message".to_owned()),
                timestamp: None,
            },
        )
        .await;
    alice.expect_silence().await;
    bob.expect_silence().await;
}
