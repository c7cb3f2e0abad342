mod applier;
mod client;
mod reconcile;
mod resync;
mod store;

pub use client::{SessionClient, SessionConfig};
pub use store::SessionState;
