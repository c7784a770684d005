use std::sync::Arc;

use beacon_core::{
    ChatMessage, ClientMessage, PUBLIC_CHAT_ROOM, PeerId, RoomName, ServerEvent,
};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::RelayConfig;
use crate::relay::chat::ChatLog;
use crate::relay::command::RelayCommand;
use crate::relay::connection::ConnectionHandle;
use crate::relay::error::DispatchError;
use crate::relay::handle::RelayHandle;
use crate::relay::registry::Registry;
use crate::relay::rooms::RoomIndex;

/// The signaling relay: one task owning the connection registry, the room
/// index and the chat history.
///
/// Every structural change (registration, membership, removal) happens on
/// this task, so routing always sees registry and rooms in agreement. The
/// heartbeat runs as a timer branch of the same loop; the only state
/// touched from elsewhere is the per-connection liveness flag.
pub struct Relay {
    config: RelayConfig,
    registry: Arc<Registry>,
    rooms: RoomIndex,
    chat: ChatLog,
    commands: mpsc::Receiver<RelayCommand>,
}

impl Relay {
    /// Create a relay and the handle the transport layer reaches it
    /// through. The caller is expected to spawn [`Relay::run`].
    pub fn new(config: RelayConfig) -> (Self, RelayHandle) {
        let (command_sender, command_receiver) = mpsc::channel(512);
        let registry = Arc::new(Registry::new());
        let handle = RelayHandle::new(registry.clone(), command_sender);
        let chat = ChatLog::new(config.chat_history_limit);

        let relay = Self {
            config,
            registry,
            rooms: RoomIndex::new(),
            chat,
            commands: command_receiver,
        };
        (relay, handle)
    }

    /// Event loop: transport commands and heartbeat ticks, one at a time.
    pub async fn run(mut self) {
        info!("Relay event loop started");

        let mut probe = tokio::time::interval(self.config.heartbeat_interval);
        probe.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = self.commands.recv() => {
                    match cmd {
                        Some(RelayCommand::Shutdown) => {
                            info!("Shutdown requested");
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd),
                        None => {
                            info!("All relay handles dropped");
                            break;
                        }
                    }
                }

                _ = probe.tick() => {
                    self.run_probe_cycle();
                }
            }
        }

        self.registry.close_all();
        info!("Relay event loop finished");
    }

    fn handle_command(&mut self, cmd: RelayCommand) {
        match cmd {
            RelayCommand::Connect { outbound, reply } => {
                let peer_id = self.registry.insert(ConnectionHandle::new(outbound));
                info!(
                    "Client connected: {} (total {})",
                    peer_id,
                    self.registry.len()
                );

                let welcome = ServerEvent::Welcome {
                    peer_id: peer_id.clone(),
                };
                self.send_or_reap(&peer_id, &welcome);

                if reply.send(peer_id.clone()).is_err() {
                    // the upgrade task bailed before learning its id
                    self.remove_connection(&peer_id, "handshake abandoned");
                }
            }
            RelayCommand::Inbound { from, frame } => {
                if let Err(e) = self.dispatch(&from, frame.as_str()) {
                    match e {
                        DispatchError::Malformed(e) => {
                            warn!("Invalid message from {}: {}", from, e);
                        }
                        other => debug!("Dropped frame from {}: {}", from, other),
                    }
                }
            }
            RelayCommand::Disconnect { peer_id } => {
                self.remove_connection(&peer_id, "socket closed");
            }
            // handled by the event loop before dispatch
            RelayCommand::Shutdown => {}
        }
    }

    /// Route one inbound frame from `from`.
    fn dispatch(&mut self, from: &PeerId, frame: &str) -> Result<(), DispatchError> {
        if !self.registry.contains(from) {
            return Err(DispatchError::UnknownSender(from.clone()));
        }

        match serde_json::from_str::<ClientMessage>(frame)? {
            ClientMessage::Join { room } => self.handle_join(from, room),
            ClientMessage::JoinRoom { room_name, peer_id } => {
                if peer_id.is_some_and(|claimed| claimed != *from) {
                    debug!("{} joins {} under a mismatched self-reported id", from, room_name);
                }
                self.handle_join(from, room_name);
            }
            ClientMessage::Signal {
                to,
                room,
                kind,
                signal_data,
            } => self.handle_signal(from, to, room, kind, signal_data),
            ClientMessage::PresenceCheck { peer_id } => {
                if !self.config.presence {
                    return Err(DispatchError::Disabled("presence-check"));
                }
                let is_online = self.registry.contains(&peer_id);
                debug!("{} asked about {}: online={}", from, peer_id, is_online);
                self.send_or_reap(from, &ServerEvent::PresenceResponse { peer_id, is_online });
            }
            ClientMessage::ListPeers => {
                if !self.config.peer_list {
                    return Err(DispatchError::Disabled("list-peers"));
                }
                let peers = self.registry.snapshot_ids();
                debug!("{} requested the peer list ({} online)", from, peers.len());
                self.send_or_reap(from, &ServerEvent::PeerList { peers });
            }
            ClientMessage::PublicMessage {
                from: author,
                text,
                timestamp,
            } => {
                if !self.config.chat {
                    return Err(DispatchError::Disabled("public-message"));
                }
                self.handle_public_message(from, author, text, timestamp)?;
            }
        }
        Ok(())
    }

    fn handle_join(&mut self, from: &PeerId, room: RoomName) {
        if self.rooms.join(room.clone(), from.clone()) {
            info!("{} joined room '{}'", from, room);
        } else {
            debug!("{} re-joined room '{}'", from, room);
        }

        // announce unconditionally; a re-join refreshes the others' view
        let joined = ServerEvent::PeerJoined {
            peer_id: from.clone(),
        };
        for member in self.rooms.members_except(&room, from) {
            self.send_or_reap(&member, &joined);
        }

        if self.config.chat && room.0 == PUBLIC_CHAT_ROOM && !self.chat.is_empty() {
            let history = ServerEvent::ChatHistory {
                messages: self.chat.snapshot(),
            };
            self.send_or_reap(from, &history);
        }
    }

    fn handle_signal(
        &mut self,
        from: &PeerId,
        to: Option<PeerId>,
        room: Option<RoomName>,
        kind: Option<String>,
        signal_data: Value,
    ) {
        let tag = signal_kind(kind.as_deref(), &signal_data).to_owned();

        if let Some(target) = to {
            // a direct target wins over any room field
            if self.registry.contains(&target) {
                debug!("{} -> {} | signal: {}", from, target, tag);
                let event = ServerEvent::Signal {
                    from: from.clone(),
                    signal_data,
                };
                self.send_or_reap(&target, &event);
            } else {
                debug!("{} -> {} | dropped, unknown target | signal: {}", from, target, tag);
            }
        } else if let Some(room) = room {
            debug!("{} -> room '{}' | signal: {}", from, room, tag);
            let event = ServerEvent::Signal {
                from: from.clone(),
                signal_data,
            };
            for member in self.rooms.members_except(&room, from) {
                self.send_or_reap(&member, &event);
            }
        } else {
            debug!("{} -> all | signal: {}", from, tag);
            let event = ServerEvent::Signal {
                from: from.clone(),
                signal_data,
            };
            for dead in self.registry.broadcast_except(from, &event) {
                self.remove_connection(&dead, "send failed");
            }
        }
    }

    fn handle_public_message(
        &mut self,
        from: &PeerId,
        author: Option<String>,
        text: Option<String>,
        timestamp: Option<u64>,
    ) -> Result<(), DispatchError> {
        let (Some(author), Some(text), Some(timestamp)) = (author, text, timestamp) else {
            return Err(DispatchError::IncompleteChatMessage);
        };

        let message = ChatMessage {
            from: author,
            text,
            timestamp,
        };
        self.chat.push(message.clone());
        debug!(
            "{} posted to {} (history {})",
            from,
            PUBLIC_CHAT_ROOM,
            self.chat.len()
        );

        // everyone in the public room hears it, the author included
        let event = ServerEvent::PublicMessage {
            from: message.from,
            text: message.text,
            timestamp: message.timestamp,
        };
        for member in self.rooms.members(&RoomName::public_chat()) {
            self.send_or_reap(&member, &event);
        }
        Ok(())
    }

    fn run_probe_cycle(&mut self) {
        for peer_id in self.registry.begin_probe_cycle() {
            info!("Evicting unresponsive connection {}", peer_id);
            self.remove_connection(&peer_id, "heartbeat timeout");
        }
    }

    /// Deliver `event` to `to`; a dead socket triggers that connection's
    /// own cleanup and is never the sender's problem.
    fn send_or_reap(&mut self, to: &PeerId, event: &ServerEvent) {
        if !self.registry.send(to, event) {
            self.remove_connection(to, "send failed");
        }
    }

    /// The single cleanup path for peer close, transport failure and
    /// heartbeat eviction. Whichever fires first wins; the rest no-op.
    fn remove_connection(&mut self, peer_id: &PeerId, reason: &str) {
        let Some(handle) = self.registry.remove(peer_id) else {
            return;
        };

        let left = ServerEvent::PeerLeft {
            peer_id: peer_id.clone(),
        };
        for room in self.rooms.leave_all(peer_id) {
            for member in self.rooms.members(&room) {
                self.send_or_reap(&member, &left);
            }
        }
        handle.close();

        info!(
            "Client disconnected: {} ({}; total {})",
            peer_id,
            reason,
            self.registry.len()
        );
    }
}

/// Tag for trace lines: the frame's own `type` if present, else the
/// payload's, else a placeholder.
fn signal_kind<'a>(kind: Option<&'a str>, signal_data: &'a Value) -> &'a str {
    kind.or_else(|| signal_data.get("type").and_then(Value::as_str))
        .unwrap_or("[object]")
}
