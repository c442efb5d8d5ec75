//! Error types for kvwire
//!
//! Provides a unified error type for all encode/decode operations.

use thiserror::Error;

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for kvwire operations
#[derive(Debug, Error)]
pub enum WireError {
    // -------------------------------------------------------------------------
    // I/O Errors (stream helpers only)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    /// Input does not parse as a well-formed frame: truncated header or
    /// section, length prefix over the configured limit, trailing bytes,
    /// checksum or item-count mismatch.
    #[error("Malformed frame: {0}")]
    Malformed(String),

    /// Discriminant tag outside the recognized set for its position.
    /// Never coerced to a known value; reserved gaps decode to this too.
    #[error("Unknown {kind} tag: 0x{tag:02x}")]
    UnknownVariant { kind: &'static str, tag: u8 },

    /// A set-typed record whose frame ends before any value section. The
    /// decoder cannot tell it from an absent-value record, which means a
    /// schema violation upstream, not line noise.
    #[error("Ambiguous record: set frame carries no value section")]
    AmbiguousValue,
}
