//! Key-value record definitions
//!
//! The data-plane record: read, write, delete.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};

/// Record discriminants
///
/// `Get` holds the zero tag on purpose: a zero-initialized or defaulted
/// discriminant must always read back as the value-free read, so a
/// truncated `Set` can never pass for a valid operation. `Set` is never
/// assigned tag 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum KeyValueType {
    /// Read by key
    #[default]
    Get = 0,
    /// Write key -> value
    Set = 1,
    /// Delete by key
    Remove = 2,
}

impl KeyValueType {
    /// Look up a variant by wire tag
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(KeyValueType::Get),
            1 => Ok(KeyValueType::Set),
            2 => Ok(KeyValueType::Remove),
            _ => Err(WireError::UnknownVariant {
                kind: "record",
                tag,
            }),
        }
    }

    /// Wire tag of this variant
    pub fn tag(self) -> u8 {
        self as u8
    }
}

// Wire tags are frozen; in particular Set must never take the zero tag.
const _: () = {
    assert!(KeyValueType::Get as u8 == 0);
    assert!(KeyValueType::Set as u8 == 1);
    assert!(KeyValueType::Remove as u8 == 2);
};

/// A single data-plane operation
///
/// Only `Set` carries a value. For `Get` and `Remove` the value is
/// not-present at the type level, so an empty value on the wire and an
/// absent value cannot diverge in meaning.
///
/// Records are ephemeral: one instance per logical operation, no shared
/// state between instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyValue {
    /// Read a value by key
    Get { key: Vec<u8> },

    /// Write a key-value pair
    Set { key: Vec<u8>, value: Vec<u8> },

    /// Delete a key
    Remove { key: Vec<u8> },
}

impl KeyValue {
    /// Read record for `key`
    pub fn get(key: Vec<u8>) -> Self {
        KeyValue::Get { key }
    }

    /// Write record mapping `key` to `value`
    pub fn set(key: Vec<u8>, value: Vec<u8>) -> Self {
        KeyValue::Set { key, value }
    }

    /// Delete record for `key`
    pub fn remove(key: Vec<u8>) -> Self {
        KeyValue::Remove { key }
    }

    /// Wire discriminant of this record
    pub fn kind(&self) -> KeyValueType {
        match self {
            KeyValue::Get { .. } => KeyValueType::Get,
            KeyValue::Set { .. } => KeyValueType::Set,
            KeyValue::Remove { .. } => KeyValueType::Remove,
        }
    }

    /// The key, present on every variant
    pub fn key(&self) -> &[u8] {
        match self {
            KeyValue::Get { key } | KeyValue::Set { key, .. } | KeyValue::Remove { key } => key,
        }
    }

    /// The value; only `Set` carries one
    pub fn value(&self) -> Option<&[u8]> {
        match self {
            KeyValue::Set { value, .. } => Some(value),
            KeyValue::Get { .. } | KeyValue::Remove { .. } => None,
        }
    }
}
