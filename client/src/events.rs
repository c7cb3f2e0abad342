use crate::shared::{Analytics, Fen, Side};

/// Events surfaced to the presentation layer.
///
/// Emitted only on semantic change: a redundant authoritative push produces
/// no events at all, so a renderer driven by this queue never flickers.
/// Drained via [`crate::SessionClient::take_events`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The position (and side to move) changed, speculatively or
    /// authoritatively.
    BoardChanged { fen: Fen, turn: Side },
    /// The human-readable game status line changed.
    StatusChanged { status: String },
    /// The game ended. Fired once per distinct winner value, never refired
    /// on repeated identical pushes.
    GameOver { winner: Side },
    /// The material-advantage trace changed.
    AnalyticsUpdated { analytics: Analytics },
    /// The server rejected the speculative move; local state has already
    /// been rolled back to the pre-move snapshot.
    MoveRejected { reason: String },
    /// Another participant joined the session.
    PlayerJoined { name: String },
    /// The number of connected participants changed.
    PlayerCountChanged { count: u32 },
    /// This client was assigned a color; orient the board accordingly.
    ColorAssigned { side: Side },
}
