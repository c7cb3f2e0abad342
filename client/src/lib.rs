//! # Lanchess Client
//! Client-side optimistic move protocol and reconciliation engine for a
//! two-party board game session.
//!
//! The [`SessionClient`] speculatively applies locally-proposed moves before
//! server confirmation, reconciles against authoritative snapshots without
//! visual flicker, rolls speculative state back on rejection, and keeps a
//! periodic resynchronization cadence to recover from missed pushes. It is
//! transport-agnostic: inbound [`shared::ServerMessage`]s are fed in through
//! [`SessionClient::receive`] and outbound [`shared::ClientMessage`]s are
//! drained through [`SessionClient::take_outgoing`].

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use lanchess_shared as shared;

mod error;
mod events;
mod rules;
mod session;

pub use error::MoveError;
pub use events::SessionEvent;
pub use rules::{Rules, RulesError, StandardRules, Terminal};
pub use session::{SessionClient, SessionConfig, SessionState};
