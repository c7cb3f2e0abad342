//! # Lanchess Shared
//! Wire protocol and board domain types shared between the lanchess client
//! and any server implementation speaking the same named-message contract.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod backends;
mod fen;
mod messages;
mod types;

pub use backends::Timer;
pub use fen::Fen;
pub use messages::{
    error::MessageError, Analytics, BoardSnapshot, ClientMessage, ServerMessage,
};
pub use types::{Move, PieceKind, Side, Square, SquareParseError};
