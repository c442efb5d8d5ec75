//! Batch packaging
//!
//! Packs an ordered sequence of messages into one transmissible,
//! integrity-checked unit and unpacks it back.
//!
//! ## Envelope Format
//! ```text
//! ┌──────────┬───────────────────────────────────────┬──────────┐
//! │ count(4) │ count x [kind(1) | frame_len(4) | frame] │ crc32(4) │
//! └──────────┴───────────────────────────────────────┴──────────┘
//! ```
//!
//! The CRC32 trailer covers every byte before it. Items are
//! length-prefixed, so one malformed item never corrupts the framing of
//! the items after it; [`unpack_each`] surfaces such failures per item,
//! while [`unpack`] aborts the batch on the first one. Envelope damage
//! (truncation, checksum, count) always aborts — there is nothing left to
//! resynchronize against.
//!
//! ### Item Kinds
//! - 0x00: command option frame
//! - 0x01: key-value record frame

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::codec::{decode_option_with, decode_record_with, encode_option, encode_record};
use crate::command::CommandOption;
use crate::config::Limits;
use crate::error::{Result, WireError};
use crate::record::KeyValue;

/// Item kind byte for a command option frame
const OPTION_KIND: u8 = 0x00;

/// Item kind byte for a key-value record frame
const RECORD_KIND: u8 = 0x01;

/// Per-item overhead: 1 byte kind + 4 bytes frame length
const ITEM_HEADER_SIZE: usize = 5;

/// Envelope overhead: 4-byte count + 4-byte checksum trailer
const ENVELOPE_OVERHEAD: usize = 8;

/// One item of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Packet {
    /// Control/administrative envelope
    Option(CommandOption),

    /// Data-plane record
    Record(KeyValue),
}

impl Packet {
    fn kind_byte(&self) -> u8 {
        match self {
            Packet::Option(_) => OPTION_KIND,
            Packet::Record(_) => RECORD_KIND,
        }
    }

    fn encode(&self) -> Vec<u8> {
        match self {
            Packet::Option(option) => encode_option(option),
            Packet::Record(record) => encode_record(record),
        }
    }
}

impl From<CommandOption> for Packet {
    fn from(option: CommandOption) -> Self {
        Packet::Option(option)
    }
}

impl From<KeyValue> for Packet {
    fn from(record: KeyValue) -> Self {
        Packet::Record(record)
    }
}

/// Pack a sequence of packets into one envelope
///
/// Deterministic and order-preserving: unpacking yields the same packets
/// in the same order.
pub fn pack(packets: &[Packet]) -> Vec<u8> {
    let mut body = Vec::with_capacity(ENVELOPE_OVERHEAD + packets.len() * ITEM_HEADER_SIZE);
    body.put_u32(packets.len() as u32);

    for packet in packets {
        let frame = packet.encode();
        body.put_u8(packet.kind_byte());
        body.put_u32(frame.len() as u32);
        body.extend_from_slice(&frame);
    }

    let crc = crc32fast::hash(&body);
    body.put_u32(crc);

    trace!(items = packets.len(), bytes = body.len(), "packed command package");
    body
}

/// Unpack an envelope, aborting the batch on the first bad item
pub fn unpack(bytes: &[u8]) -> Result<Vec<Packet>> {
    unpack_with(bytes, &Limits::default())
}

/// Unpack an envelope with explicit limits, aborting on the first bad item
pub fn unpack_with(bytes: &[u8], limits: &Limits) -> Result<Vec<Packet>> {
    let mut packets = Vec::new();
    for item in unpack_each_with(bytes, limits)? {
        packets.push(item?);
    }
    Ok(packets)
}

/// Unpack an envelope, surfacing item failures individually
///
/// The outer result covers the envelope: truncation, checksum mismatch,
/// item count over the limit, or count not matching the body. Each inner
/// result covers one item's frame, in packing order.
pub fn unpack_each(bytes: &[u8]) -> Result<Vec<Result<Packet>>> {
    unpack_each_with(bytes, &Limits::default())
}

/// Unpack an envelope with explicit limits, surfacing item failures
/// individually
pub fn unpack_each_with(bytes: &[u8], limits: &Limits) -> Result<Vec<Result<Packet>>> {
    if bytes.len() < ENVELOPE_OVERHEAD {
        return Err(WireError::Malformed(format!(
            "Incomplete package envelope: expected at least {} bytes, got {}",
            ENVELOPE_OVERHEAD,
            bytes.len()
        )));
    }

    // Checksum first: a damaged envelope has no trustworthy framing.
    let (body, mut trailer) = bytes.split_at(bytes.len() - 4);
    let expected = trailer.get_u32();
    let actual = crc32fast::hash(body);
    if actual != expected {
        return Err(WireError::Malformed(format!(
            "Package checksum mismatch: expected 0x{expected:08x}, got 0x{actual:08x}"
        )));
    }

    let mut buf = body;
    let count = buf.get_u32() as usize;
    if count > limits.max_package_items {
        return Err(WireError::Malformed(format!(
            "Package item count {} exceeds limit {}",
            count, limits.max_package_items
        )));
    }

    let mut items = Vec::with_capacity(count);
    for index in 0..count {
        if buf.remaining() < ITEM_HEADER_SIZE {
            return Err(WireError::Malformed(format!(
                "Incomplete item header at index {}: expected {} bytes, got {}",
                index,
                ITEM_HEADER_SIZE,
                buf.remaining()
            )));
        }
        let kind = buf.get_u8();
        let frame_len = buf.get_u32() as usize;
        if buf.remaining() < frame_len {
            return Err(WireError::Malformed(format!(
                "Incomplete item frame at index {}: expected {} bytes, got {}",
                index,
                frame_len,
                buf.remaining()
            )));
        }

        let frame = &buf[..frame_len];
        let item = match kind {
            OPTION_KIND => decode_option_with(frame, limits).map(Packet::Option),
            RECORD_KIND => decode_record_with(frame, limits).map(Packet::Record),
            _ => Err(WireError::UnknownVariant {
                kind: "packet",
                tag: kind,
            }),
        };
        if let Err(ref err) = item {
            debug!(index, %err, "package item failed to decode");
        }
        items.push(item);
        buf.advance(frame_len);
    }

    if buf.has_remaining() {
        return Err(WireError::Malformed(format!(
            "Trailing bytes after final package item: {}",
            buf.remaining()
        )));
    }

    trace!(items = count, bytes = bytes.len(), "unpacked command package");
    Ok(items)
}
