//! Command option definitions
//!
//! The control/administrative envelope exchanged with the storage engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};

/// Control command discriminants
///
/// Tags are part of the wire format: existing tags never change and new
/// variants append with the next unused tag. Tag 3 is reserved and stays
/// unassigned for backward compatibility with deployed decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum OptionType {
    /// Identifies the current/default operation
    #[default]
    Cmd = 0,
    /// Batched sequence of operations
    BatchCmd = 1,
    /// Raw byte payload carrier
    Bytes = 2,
    /// Query: total/used disk size
    SizeOfDisk = 4,
    /// Query: count of stored entries
    Len = 5,
    /// Force persistence of buffered writes
    Flush = 6,
    /// Explicit absence / no-op sentinel
    None = 7,
}

impl OptionType {
    /// Look up a variant by wire tag
    ///
    /// The reserved gap at tag 3 decodes as unknown, same as any
    /// unassigned tag.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(OptionType::Cmd),
            1 => Ok(OptionType::BatchCmd),
            2 => Ok(OptionType::Bytes),
            4 => Ok(OptionType::SizeOfDisk),
            5 => Ok(OptionType::Len),
            6 => Ok(OptionType::Flush),
            7 => Ok(OptionType::None),
            _ => Err(WireError::UnknownVariant {
                kind: "option",
                tag,
            }),
        }
    }

    /// Wire tag of this variant
    pub fn tag(self) -> u8 {
        self as u8
    }
}

// Wire tags are frozen; renumbering must fail to compile.
const _: () = {
    assert!(OptionType::Cmd as u8 == 0);
    assert!(OptionType::BatchCmd as u8 == 1);
    assert!(OptionType::Bytes as u8 == 2);
    assert!(OptionType::SizeOfDisk as u8 == 4);
    assert!(OptionType::Len as u8 == 5);
    assert!(OptionType::Flush as u8 == 6);
    assert!(OptionType::None as u8 == 7);
};

/// A control/administrative command envelope
///
/// `value` is output-only: it carries the numeric result of a query-style
/// command (`SizeOfDisk`, `Len`) on the response path. It defaults to 0,
/// and a 0 on the wire cannot be told apart from "not set" — consumers
/// must check `kind` before reading it. For kinds with no numeric result
/// the field is carried verbatim and means nothing.
///
/// Each instance is owned by the single request/response context that
/// created it; instances are never shared across operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Discriminates intent
    pub kind: OptionType,

    /// Opaque payload; empty unless `kind` calls for one
    pub bytes: Vec<u8>,

    /// Numeric result of a query-style command; 0 otherwise
    pub value: u64,
}

impl CommandOption {
    /// Create an envelope from its parts
    pub fn new(kind: OptionType, bytes: Vec<u8>, value: u64) -> Self {
        Self { kind, bytes, value }
    }

    /// Envelope for the current/default operation
    pub fn cmd() -> Self {
        Self::new(OptionType::Cmd, Vec::new(), 0)
    }

    /// Envelope carrying an encoded batch body
    pub fn batch(bytes: Vec<u8>) -> Self {
        Self::new(OptionType::BatchCmd, bytes, 0)
    }

    /// Raw byte payload carrier
    pub fn bytes(payload: Vec<u8>) -> Self {
        Self::new(OptionType::Bytes, payload, 0)
    }

    /// Disk-size query, or its response carrying the measured size
    pub fn size_of_disk(size: u64) -> Self {
        Self::new(OptionType::SizeOfDisk, Vec::new(), size)
    }

    /// Entry-count query, or its response carrying the count
    pub fn len(count: u64) -> Self {
        Self::new(OptionType::Len, Vec::new(), count)
    }

    /// Request to persist buffered writes
    pub fn flush() -> Self {
        Self::new(OptionType::Flush, Vec::new(), 0)
    }

    /// Explicit no-op
    pub fn none() -> Self {
        Self::new(OptionType::None, Vec::new(), 0)
    }
}
