//! # Speculative Move Applier
//!
//! Turns a drag/drop-style user intent into a rule-checked local transition
//! and hands back the move descriptor for transmission. Sending the payload
//! is the caller's responsibility; this component never talks to the
//! transport, which keeps it independently testable.

use crate::shared::{Move, PieceKind, Square};
use crate::{MoveError, Rules, SessionEvent};

use super::reconcile::{PendingMove, ReconcileEngine};
use super::store::SessionStore;

/// Promotion piece assumed when the rule engine needs one to evaluate
/// legality. Only ever used for local evaluation: the move descriptor that
/// leaves this module carries a promotion only when the transition genuinely
/// promotes.
const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

pub struct MoveApplier<R: Rules> {
    rules: R,
}

impl<R: Rules> MoveApplier<R> {
    pub fn new(rules: R) -> Self {
        MoveApplier { rules }
    }

    /// Validate the intent against local rules, apply it optimistically, and
    /// return the move descriptor for transmission.
    ///
    /// Rejects deterministically without mutating the store when the rule
    /// engine reports the transition illegal (`IllegalMove`) or when a
    /// speculative move is already outstanding (`MoveInFlight`). On success,
    /// records the pending move (capturing the pre-move snapshot for
    /// rollback) and overlays the tentative position.
    pub fn propose(
        &self,
        store: &mut SessionStore,
        reconcile: &mut ReconcileEngine,
        from: Square,
        to: Square,
        events: &mut Vec<SessionEvent>,
    ) -> Result<Move, MoveError> {
        if reconcile.has_pending() {
            return Err(MoveError::MoveInFlight);
        }
        if self.rules.is_terminal(store.position()).ended {
            return Err(MoveError::IllegalMove);
        }

        let mut chosen: Option<Move> = None;
        for candidate in self.rules.legal_moves(store.position(), from) {
            if candidate.to != to {
                continue;
            }
            // A promoting intent matches several legal moves (one per
            // piece); settle on the default promotion.
            if candidate.promotion.is_none() || candidate.promotion == Some(DEFAULT_PROMOTION) {
                chosen = Some(candidate);
                break;
            }
        }
        let mv = chosen.ok_or(MoveError::IllegalMove)?;

        let (tentative_fen, tentative_turn) = self
            .rules
            .apply_move(store.position(), &mv)
            .map_err(|_| MoveError::IllegalMove)?;

        reconcile.begin(PendingMove {
            mv: mv.clone(),
            pre_move_fen: store.position().clone(),
            pre_move_turn: store.state().turn,
            tentative_fen: tentative_fen.clone(),
        });
        store.apply_tentative(tentative_fen, tentative_turn, events);

        Ok(mv)
    }
}
