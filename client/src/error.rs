use thiserror::Error;

/// Errors surfaced synchronously when the user proposes a move
///
/// Both variants are resolved entirely client-side: no network traffic is
/// sent and session state is left untouched. Server-side rejection of an
/// already-sent move is not an error type; it surfaces asynchronously as a
/// [`crate::SessionEvent::MoveRejected`] event after rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The local rule check failed for the proposed transition
    #[error("Move is not legal in the current position")]
    IllegalMove,

    /// A speculative move is already awaiting the server's verdict; at most
    /// one unconfirmed move may be in flight at a time
    #[error("A move is already in flight; wait for the server to resolve it")]
    MoveInFlight,
}
