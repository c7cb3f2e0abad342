use std::time::Duration;

use log::info;

use crate::shared::{ClientMessage, Move, ServerMessage, Side, Square};
use crate::{MoveError, Rules, SessionEvent, StandardRules};

use super::applier::MoveApplier;
use super::reconcile::ReconcileEngine;
use super::resync::ResyncScheduler;
use super::store::{SessionState, SessionStore};

/// Tuning knobs for a [`SessionClient`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Cadence of the out-of-band state pull that bounds staleness when a
    /// push message is lost.
    pub resync_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            resync_interval: Duration::from_secs(2),
        }
    }
}

/// One game session: owns the local position store, the speculative move
/// applier, the reconciliation engine and the resync scheduler, and exposes
/// outbound-message and presentation-event queues to the layers around it.
///
/// All state transitions happen in response to discrete events — a user
/// intent ([`Self::propose_move`]), an inbound message ([`Self::receive`]),
/// or a scheduling tick ([`Self::update`]) — each running to completion
/// before the next, so no locking is involved anywhere.
pub struct SessionClient<R: Rules = StandardRules> {
    store: SessionStore,
    applier: MoveApplier<R>,
    reconcile: ReconcileEngine,
    resync: ResyncScheduler,
    assigned_side: Option<Side>,
    outgoing: Vec<ClientMessage>,
    events: Vec<SessionEvent>,
}

impl SessionClient<StandardRules> {
    /// A session client using the standard chess rule engine.
    pub fn new(name: &str, config: SessionConfig) -> Self {
        Self::with_rules(name, config, StandardRules)
    }
}

impl<R: Rules> SessionClient<R> {
    /// A session client over a caller-supplied rule engine. Queues the
    /// `join_game` announcement immediately.
    pub fn with_rules(name: &str, config: SessionConfig, rules: R) -> Self {
        info!("joining game as '{}'", name);
        let mut client = SessionClient {
            store: SessionStore::new(),
            applier: MoveApplier::new(rules),
            reconcile: ReconcileEngine::new(),
            resync: ResyncScheduler::new(config.resync_interval),
            assigned_side: None,
            outgoing: Vec::new(),
            events: Vec::new(),
        };
        client.outgoing.push(ClientMessage::JoinGame {
            name: name.to_string(),
        });
        client
    }

    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    /// The color assigned to this client once both seats are filled.
    pub fn assigned_side(&self) -> Option<Side> {
        self.assigned_side
    }

    /// The speculative move currently awaiting the server's verdict, if any.
    pub fn pending_move(&self) -> Option<&Move> {
        self.reconcile.pending_move()
    }

    /// Validate a move locally, apply it optimistically, and queue it for
    /// transmission.
    ///
    /// Fails synchronously with [`MoveError::IllegalMove`] when the rule
    /// engine rejects the transition (or the game is already over), and with
    /// [`MoveError::MoveInFlight`] when a speculative move is already
    /// outstanding. Neither failure mutates state or queues a message.
    pub fn propose_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        if self.store.state().winner.is_some() {
            return Err(MoveError::IllegalMove);
        }
        let mv = self.applier.propose(
            &mut self.store,
            &mut self.reconcile,
            from,
            to,
            &mut self.events,
        )?;
        self.outgoing.push(ClientMessage::for_move(&mv));
        Ok(mv)
    }

    /// Feed one inbound server message through the reconciliation path.
    pub fn receive(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::BoardUpdate(snapshot) => {
                self.reconcile
                    .receive_snapshot(&mut self.store, &snapshot, &mut self.events);
            }
            ServerMessage::InvalidMove { error } => {
                self.reconcile
                    .receive_rejection(&mut self.store, &error, &mut self.events);
            }
            ServerMessage::PlayerJoined { name } => {
                self.events.push(SessionEvent::PlayerJoined { name });
            }
            ServerMessage::UpdatePlayerCount { count } => {
                self.events.push(SessionEvent::PlayerCountChanged { count });
            }
            ServerMessage::StartGameInfo { color } => {
                self.assigned_side = Some(color);
                self.events.push(SessionEvent::ColorAssigned { side: color });
            }
        }
    }

    /// Drive the resync cadence; call once per scheduling tick.
    pub fn update(&mut self) {
        if self.resync.poll() {
            self.outgoing.push(ClientMessage::RequestSync);
        }
    }

    /// Ask the server to restart the game for all participants.
    pub fn request_reset(&mut self) {
        self.outgoing.push(ClientMessage::Reset);
    }

    /// Drain the messages queued for transmission.
    pub fn take_outgoing(&mut self) -> Vec<ClientMessage> {
        std::mem::take(&mut self.outgoing)
    }

    /// Drain the events queued for the presentation layer.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Tear down the session's resync schedule. Double-teardown is a no-op.
    pub fn teardown(&mut self) {
        self.resync.cancel();
    }
}
