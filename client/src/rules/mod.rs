//! Rule-engine seam.
//!
//! The move-legality and game-termination engine is an external collaborator
//! with a fixed contract; the session core only ever talks to it through the
//! [`Rules`] trait, so reconciliation logic can be exercised against a
//! scripted implementation in tests.

mod standard;

pub use standard::StandardRules;

use thiserror::Error;

use crate::shared::{Fen, Move, Side, Square};

/// Terminal-condition report for a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Terminal {
    pub ended: bool,
    pub winner: Option<Side>,
}

/// Errors reported by a rule engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The position encoding could not be parsed
    #[error("Position encoding is not parseable: {fen}")]
    InvalidPosition { fen: String },

    /// The transition is not legal in the given position
    #[error("Move is not a legal transition in the given position")]
    IllegalTransition,
}

pub trait Rules {
    /// All legal moves from `from` in `position`; empty if there are none.
    fn legal_moves(&self, position: &Fen, from: Square) -> Vec<Move>;

    /// Apply a legal move, returning the resulting position encoding and the
    /// side to move in it.
    fn apply_move(&self, position: &Fen, mv: &Move) -> Result<(Fen, Side), RulesError>;

    /// Whether `position` is terminal, and who won if anyone.
    fn is_terminal(&self, position: &Fen) -> Terminal;
}
