use thiserror::Error;

/// Errors that can occur while encoding or decoding wire messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Failed to serialize an outbound message
    #[error("Failed to encode outbound message: {reason}")]
    Encode { reason: String },

    /// Inbound text was not a well-formed message (unknown event name,
    /// missing fields, or invalid JSON)
    #[error("Failed to decode inbound message: {reason}")]
    Malformed { reason: String },
}
