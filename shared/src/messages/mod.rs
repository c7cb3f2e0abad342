//! Named-message wire contract between client and server.
//!
//! The transport is a bidirectional named-message channel with at-least-once
//! delivery and no cross-type ordering guarantee; every message here is a
//! self-contained JSON document tagged with its event name, so receivers can
//! classify defensively without per-connection framing state.

pub mod error;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{Fen, Move, PieceKind, Side, Square};
use error::MessageError;

/// Material-advantage trace attached to authoritative snapshots.
///
/// `score` is the latest evaluation (positive favors white); `history` is
/// the full per-move sequence, starting at 0 for the initial position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub score: i32,
    #[serde(default)]
    pub history: Vec<i32>,
}

impl Default for Analytics {
    fn default() -> Self {
        Analytics {
            score: 0,
            history: vec![0],
        }
    }
}

/// An authoritative board snapshot pushed by the server.
///
/// Everything but `fen` is optional on the wire: a reset broadcast carries
/// no `turn`, and `status` / `winner` / `analytics` appear only when the
/// server has something to report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub fen: Fen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

/// Outbound messages, client to server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Announce this client under a display name.
    JoinGame { name: String },
    /// Propose a move. The promotion flag is present only when the move is
    /// a genuine promotion, never as a local evaluation placeholder.
    Move {
        source: Square,
        target: Square,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<PieceKind>,
    },
    /// Ask the server to restart the game for all participants.
    Reset,
    /// Pull the current authoritative state out-of-band.
    RequestSync,
}

impl ClientMessage {
    /// Wire form of an outbound move descriptor.
    pub fn for_move(mv: &Move) -> Self {
        ClientMessage::Move {
            source: mv.from,
            target: mv.to,
            promotion: mv.promotion,
        }
    }

    pub fn to_json(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(|err| MessageError::Encode {
            reason: err.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, MessageError> {
        serde_json::from_str(text).map_err(|err| MessageError::Malformed {
            reason: err.to_string(),
        })
    }
}

/// Inbound messages, server to client.
///
/// Decoded defensively: delivery is at-least-once with no cross-type
/// ordering guarantee, so an unparseable or unknown message is an error to
/// report, never a reason to crash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Another participant joined the session.
    PlayerJoined { name: String },
    /// The number of connected participants changed.
    UpdatePlayerCount { count: u32 },
    /// Authoritative snapshot; always wins over local speculation.
    BoardUpdate(BoardSnapshot),
    /// The server refused the client's speculative move.
    InvalidMove { error: String },
    /// Color assignment once both seats are filled.
    StartGameInfo { color: Side },
}

impl ServerMessage {
    pub fn to_json(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(|err| MessageError::Encode {
            reason: err.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, MessageError> {
        serde_json::from_str(text).map_err(|err| {
            warn!("discarding malformed inbound message: {}", err);
            MessageError::Malformed {
                reason: err.to_string(),
            }
        })
    }
}
