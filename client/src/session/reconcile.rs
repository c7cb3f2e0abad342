//! # Reconciliation Engine
//!
//! Resolves the fate of the single pending speculative move and folds
//! server-pushed authoritative state into the store at any time, including
//! unsolicited pushes unrelated to the pending move (opponent's move,
//! periodic resync reply).
//!
//! State machine over the pending move:
//! `NONE → PENDING → {CONFIRMED, REJECTED, SUPERSEDED} → NONE`.
//!
//! The first message that resolves the pending move wins; any later message
//! referencing the already-resolved move is a stray and is logged and
//! discarded, so the final state is the same regardless of whether a
//! rejection and a superseding push arrive in either order.

use log::{info, trace, warn};

use crate::shared::{BoardSnapshot, Fen, Move, Side};
use crate::SessionEvent;

use super::store::SessionStore;

/// The single outstanding speculative move, with everything needed to roll
/// it back or match it against a confirming snapshot.
#[derive(Clone, Debug)]
pub struct PendingMove {
    pub mv: Move,
    pub pre_move_fen: Fen,
    pub pre_move_turn: Side,
    pub tentative_fen: Fen,
}

pub struct ReconcileEngine {
    pending: Option<PendingMove>,
    announced_winner: Option<Side>,
}

impl ReconcileEngine {
    pub fn new() -> Self {
        ReconcileEngine {
            pending: None,
            announced_winner: None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_move(&self) -> Option<&Move> {
        self.pending.as_ref().map(|pending| &pending.mv)
    }

    /// Record a freshly-sent speculative move. The applier enforces the
    /// single-outstanding-move policy before calling this.
    pub fn begin(&mut self, pending: PendingMove) {
        debug_assert!(self.pending.is_none(), "second move began while pending");
        self.pending = Some(pending);
    }

    /// Fold an authoritative snapshot into the store.
    ///
    /// While a move is pending, a snapshot matching the tentative position
    /// confirms it; any other snapshot supersedes it. Either way the pending
    /// move is cleared and the server's state is adopted unconditionally —
    /// tentative and pushed state are never merged.
    pub fn receive_snapshot(
        &mut self,
        store: &mut SessionStore,
        snapshot: &BoardSnapshot,
        events: &mut Vec<SessionEvent>,
    ) {
        match self.pending.take() {
            Some(pending) if snapshot.fen.same_position(&pending.tentative_fen) => {
                trace!("speculative move {} confirmed by server", pending.mv);
            }
            Some(pending) => {
                info!(
                    "speculative move {} superseded by authoritative snapshot",
                    pending.mv
                );
            }
            None => {}
        }

        let position_changed = store.apply_confirmed(snapshot, events);

        match snapshot.winner {
            Some(winner) => {
                if self.announced_winner != Some(winner) {
                    self.announced_winner = Some(winner);
                    events.push(SessionEvent::GameOver { winner });
                }
            }
            // A new position with no declared winner starts a new game; the
            // next result is announced even if the same side wins again.
            None if position_changed => self.announced_winner = None,
            None => {}
        }
    }

    /// Handle an explicit server rejection of the speculative move: restore
    /// the pre-move snapshot and surface the server-supplied reason.
    pub fn receive_rejection(
        &mut self,
        store: &mut SessionStore,
        reason: &str,
        events: &mut Vec<SessionEvent>,
    ) {
        match self.pending.take() {
            Some(pending) => {
                store.rollback(pending.pre_move_fen, pending.pre_move_turn, events);
                events.push(SessionEvent::MoveRejected {
                    reason: reason.to_string(),
                });
            }
            None => {
                // The pending move was already resolved by an earlier
                // message; this one is a stray.
                warn!("discarding stray rejection with no pending move: {}", reason);
            }
        }
    }
}
