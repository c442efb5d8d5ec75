//! # kvwire
//!
//! The wire protocol of a key-value storage engine:
//! - Command option envelopes for control/administrative operations
//! - Key-value records for data-plane reads and mutations
//! - Batch packaging with per-item framing and a CRC32 trailer
//!
//! This crate is only the encoding layer. The storage engine executes
//! decoded messages and a transport delivers encoded ones; neither lives
//! here.
//!
//! ## Protocol Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Transport / Engine                       │
//! │                  (external collaborators)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        package                               │
//! │      count(4) | items: kind(1)|len(4)|frame | crc32(4)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌───────────────┐       ┌───────────────┐
//!   │ CommandOption │       │   KeyValue    │
//!   │ tag|bytes|val │       │ tag|key[|val] │
//!   └───────────────┘       └───────────────┘
//! ```
//!
//! Every frame leads with its discriminant tag. Tags are wire-stable:
//! they never change, new ones append, and the reserved gap at option
//! tag 3 stays open. Unknown tags decode to an error, never to a nearest
//! known value.
//!
//! Encode and decode are pure transformations over caller-owned buffers:
//! no shared state, no I/O apart from the explicit stream helpers, safe
//! to call from any number of threads.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod command;
pub mod record;
pub mod codec;
pub mod package;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WireError};
pub use config::Limits;
pub use command::{CommandOption, OptionType};
pub use record::{KeyValue, KeyValueType};
pub use codec::{
    decode_option, decode_record, encode_option, encode_record, read_option, read_record,
    write_option, write_record,
};
pub use package::{pack, unpack, unpack_each, Packet};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
