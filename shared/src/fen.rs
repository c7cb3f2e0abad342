//! Compact textual position encoding (Forsyth-Edwards Notation).
//!
//! The client never inspects piece placement itself; it only needs to decide
//! whether two encodings describe the *same position* so that redundant
//! authoritative pushes do not trigger spurious re-renders, and to recover
//! the side to move when a snapshot omits the explicit `turn` field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Side;

const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A serialized board state, produced either by the local rule engine or by
/// the server. Never constructed from a partially applied move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fen(String);

impl Fen {
    pub fn new(encoding: impl Into<String>) -> Self {
        Fen(encoding.into())
    }

    /// The standard initial position.
    pub fn starting() -> Self {
        Fen(STARTING_FEN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two encodings describe the same position on the board.
    ///
    /// Compares piece placement, side to move and castling rights. Move
    /// counters and the en-passant field are excluded: different rule
    /// engines disagree on whether a non-capturable en-passant square is
    /// recorded, and counters legitimately differ across resets, so neither
    /// should force a visual refresh. Malformed encodings fall back to
    /// whole-string comparison.
    pub fn same_position(&self, other: &Fen) -> bool {
        let mine: Vec<&str> = self.0.split_whitespace().take(3).collect();
        let theirs: Vec<&str> = other.0.split_whitespace().take(3).collect();
        if mine.len() < 3 || theirs.len() < 3 {
            return self.0 == other.0;
        }
        mine == theirs
    }

    /// The side to move recorded in the encoding, if parseable.
    pub fn side_to_move(&self) -> Option<Side> {
        match self.0.split_whitespace().nth(1) {
            Some("w") => Some(Side::White),
            Some("b") => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
