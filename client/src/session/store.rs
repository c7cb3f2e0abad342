//! # Local Position Store
//!
//! Holds exactly one [`SessionState`]: the client's current belief about the
//! game, and the single source of truth for rendering. The store itself
//! never rejects anything; validity is the caller's responsibility. Its one
//! job beyond holding state is *semantic change detection*: events are
//! pushed only when the position, status, or analytics actually differ from
//! what is already held, so redundant authoritative pushes never reach the
//! presentation layer.

use crate::shared::{Analytics, BoardSnapshot, Fen, Side};
use crate::SessionEvent;

/// The client's current belief about the game position and metadata.
///
/// Mutated only through the reconciliation path (confirmed snapshots,
/// rollbacks) and the speculative applier's tentative overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub position: Fen,
    pub turn: Side,
    pub status: String,
    pub winner: Option<Side>,
    pub analytics: Analytics,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            position: Fen::starting(),
            turn: Side::White,
            status: String::new(),
            winner: None,
            analytics: Analytics::default(),
        }
    }
}

pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn position(&self) -> &Fen {
        &self.state.position
    }

    /// Fold in an authoritative snapshot. Returns whether the position
    /// itself changed.
    ///
    /// The server's encoding is always adopted, but `BoardChanged` fires
    /// only when it describes a different position (flicker avoidance).
    /// Status, winner and analytics are folded in whenever present, since
    /// game metadata may legitimately change while the position does not.
    pub fn apply_confirmed(
        &mut self,
        snapshot: &BoardSnapshot,
        events: &mut Vec<SessionEvent>,
    ) -> bool {
        let position_changed = !self.state.position.same_position(&snapshot.fen);
        if position_changed {
            // A reset broadcast omits the turn field; recover it from the
            // encoding itself in that case.
            let turn = snapshot
                .turn
                .or_else(|| snapshot.fen.side_to_move())
                .unwrap_or(self.state.turn);
            self.state.position = snapshot.fen.clone();
            self.state.turn = turn;
            events.push(SessionEvent::BoardChanged {
                fen: self.state.position.clone(),
                turn,
            });
        } else if self.state.position != snapshot.fen {
            // Same position, different literal encoding (move counters,
            // en-passant formatting). Keep the server's bytes as ground
            // truth without notifying the renderer.
            self.state.position = snapshot.fen.clone();
        }

        if let Some(status) = &snapshot.status {
            if &self.state.status != status {
                self.state.status = status.clone();
                events.push(SessionEvent::StatusChanged {
                    status: status.clone(),
                });
            }
        }

        match snapshot.winner {
            Some(winner) => self.state.winner = Some(winner),
            // A fresh position with no declared winner (the reset
            // broadcast shape) reopens the game.
            None if position_changed => self.state.winner = None,
            None => {}
        }

        if let Some(analytics) = &snapshot.analytics {
            if &self.state.analytics != analytics {
                self.state.analytics = analytics.clone();
                events.push(SessionEvent::AnalyticsUpdated {
                    analytics: analytics.clone(),
                });
            }
        }

        position_changed
    }

    /// Overlay the speculative post-move position while a move is pending.
    /// Never persisted past the pending move's resolution.
    pub fn apply_tentative(&mut self, fen: Fen, turn: Side, events: &mut Vec<SessionEvent>) {
        self.replace_position(fen, turn, events);
    }

    /// Discard the tentative overlay by restoring the pre-move snapshot.
    pub fn rollback(&mut self, fen: Fen, turn: Side, events: &mut Vec<SessionEvent>) {
        self.replace_position(fen, turn, events);
    }

    fn replace_position(&mut self, fen: Fen, turn: Side, events: &mut Vec<SessionEvent>) {
        if self.state.position.same_position(&fen) && self.state.turn == turn {
            return;
        }
        self.state.position = fen;
        self.state.turn = turn;
        events.push(SessionEvent::BoardChanged {
            fen: self.state.position.clone(),
            turn,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(fen: Fen, turn: Side) -> BoardSnapshot {
        BoardSnapshot {
            fen,
            turn: Some(turn),
            status: None,
            winner: None,
            analytics: None,
        }
    }

    #[test]
    fn redundant_push_emits_nothing() {
        let mut store = SessionStore::new();
        let mut events = Vec::new();

        store.apply_confirmed(&snapshot(Fen::starting(), Side::White), &mut events);
        assert!(events.is_empty());

        // Same position again, applied twice: still nothing.
        store.apply_confirmed(&snapshot(Fen::starting(), Side::White), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn changed_position_replaces_and_notifies_once() {
        let mut store = SessionStore::new();
        let mut events = Vec::new();
        let after_e4 =
            Fen::new("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");

        store.apply_confirmed(&snapshot(after_e4.clone(), Side::Black), &mut events);
        assert_eq!(store.state().position, after_e4);
        assert_eq!(store.state().turn, Side::Black);
        assert_eq!(
            events,
            vec![SessionEvent::BoardChanged {
                fen: after_e4.clone(),
                turn: Side::Black
            }]
        );

        events.clear();
        store.apply_confirmed(&snapshot(after_e4, Side::Black), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn status_and_analytics_apply_even_when_position_is_unchanged() {
        let mut store = SessionStore::new();
        let mut events = Vec::new();
        let update = BoardSnapshot {
            fen: Fen::starting(),
            turn: Some(Side::White),
            status: Some("Check!".to_string()),
            winner: None,
            analytics: Some(Analytics {
                score: 30,
                history: vec![0, 30],
            }),
        };

        store.apply_confirmed(&update, &mut events);
        assert_eq!(store.state().status, "Check!");
        assert_eq!(store.state().analytics.score, 30);
        assert_eq!(events.len(), 2);
        assert!(!events
            .iter()
            .any(|event| matches!(event, SessionEvent::BoardChanged { .. })));

        // Identical metadata again: no further events.
        events.clear();
        store.apply_confirmed(&update, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn same_position_with_different_counters_adopts_the_encoding_silently() {
        let mut store = SessionStore::new();
        let mut events = Vec::new();
        let recounted =
            Fen::new("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 7 42");

        store.apply_confirmed(&snapshot(recounted.clone(), Side::White), &mut events);
        assert_eq!(store.state().position, recounted);
        assert!(events.is_empty());
    }

    #[test]
    fn new_position_without_a_winner_clears_the_recorded_winner() {
        let mut store = SessionStore::new();
        let mut events = Vec::new();

        store.apply_confirmed(
            &BoardSnapshot {
                fen: Fen::new("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
                turn: Some(Side::White),
                status: None,
                winner: Some(Side::Black),
                analytics: None,
            },
            &mut events,
        );
        assert_eq!(store.state().winner, Some(Side::Black));

        // The reset broadcast shape: fresh position, no winner field.
        store.apply_confirmed(&snapshot(Fen::starting(), Side::White), &mut events);
        assert_eq!(store.state().winner, None);
    }

    #[test]
    fn missing_turn_is_recovered_from_the_encoding() {
        let mut store = SessionStore::new();
        let mut events = Vec::new();
        let after_e4 =
            Fen::new("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");

        store.apply_confirmed(
            &BoardSnapshot {
                fen: after_e4,
                turn: None,
                status: None,
                winner: None,
                analytics: None,
            },
            &mut events,
        );
        assert_eq!(store.state().turn, Side::Black);
    }
}
