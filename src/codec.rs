//! Frame codec
//!
//! Encoding and decoding for the two message kinds.
//!
//! ## Wire Format
//!
//! All integers are big-endian. The discriminant leads every frame; the
//! payload shape after it is chosen by the tag.
//!
//! ### CommandOption Frame
//! ```text
//! ┌─────────┬──────────────┬─────────┬───────────┐
//! │ tag (1) │ bytes_len(4) │  bytes  │ value (8) │
//! └─────────┴──────────────┴─────────┴───────────┘
//! ```
//!
//! ### KeyValue Frame
//! ```text
//! GET / REMOVE:
//! ┌─────────┬────────────┬─────┐
//! │ tag (1) │ key_len(4) │ key │
//! └─────────┴────────────┴─────┘
//!
//! SET:
//! ┌─────────┬────────────┬─────┬──────────────┬───────┐
//! │ tag (1) │ key_len(4) │ key │ value_len(4) │ value │
//! └─────────┴────────────┴─────┴──────────────┴───────┘
//! ```
//!
//! A SET frame always carries its value length prefix, even for an empty
//! value. A SET with `value_len == 0` and a GET over the same key differ
//! in their tag byte alone — the decoder never inspects the value bytes
//! to pick a discriminant.

use std::io::{Read, Write};

use bytes::{Buf, BufMut};

use crate::command::{CommandOption, OptionType};
use crate::config::Limits;
use crate::error::{Result, WireError};
use crate::record::{KeyValue, KeyValueType};

/// Fixed lead-in of every frame: 1 byte tag + 4 bytes first length prefix
pub const FRAME_HEADER_SIZE: usize = 5;

/// Size of the trailing numeric value on a command option frame
const VALUE_SIZE: usize = 8;

// =============================================================================
// CommandOption Encoding/Decoding
// =============================================================================

/// Encode a command option to bytes
///
/// Format: tag (1) + bytes_len (4) + bytes + value (8)
pub fn encode_option(option: &CommandOption) -> Vec<u8> {
    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + option.bytes.len() + VALUE_SIZE);
    frame.put_u8(option.kind.tag());
    frame.put_u32(option.bytes.len() as u32);
    frame.put_slice(&option.bytes);
    frame.put_u64(option.value);
    frame
}

/// Decode a command option from bytes, with default limits
///
/// The input must hold exactly one frame.
pub fn decode_option(bytes: &[u8]) -> Result<CommandOption> {
    decode_option_with(bytes, &Limits::default())
}

/// Decode a command option from bytes
pub fn decode_option_with(bytes: &[u8], limits: &Limits) -> Result<CommandOption> {
    let mut buf = bytes;

    if buf.remaining() < FRAME_HEADER_SIZE {
        return Err(WireError::Malformed(format!(
            "Incomplete option header: expected {} bytes, got {}",
            FRAME_HEADER_SIZE,
            buf.remaining()
        )));
    }

    let kind = OptionType::from_tag(buf.get_u8())?;

    let payload_len = buf.get_u32() as usize;
    if payload_len > limits.max_payload_size {
        return Err(WireError::Malformed(format!(
            "Option payload length {} exceeds limit {}",
            payload_len, limits.max_payload_size
        )));
    }
    if buf.remaining() < payload_len + VALUE_SIZE {
        return Err(WireError::Malformed(format!(
            "Incomplete option frame: expected {} more bytes, got {}",
            payload_len + VALUE_SIZE,
            buf.remaining()
        )));
    }

    let payload = buf[..payload_len].to_vec();
    buf.advance(payload_len);
    let value = buf.get_u64();

    if buf.has_remaining() {
        return Err(WireError::Malformed(format!(
            "Trailing bytes after option frame: {}",
            buf.remaining()
        )));
    }

    Ok(CommandOption::new(kind, payload, value))
}

// =============================================================================
// KeyValue Encoding/Decoding
// =============================================================================

/// Encode a key-value record to bytes
///
/// Format: tag (1) + key_len (4) + key, plus value_len (4) + value for SET
pub fn encode_record(record: &KeyValue) -> Vec<u8> {
    match record {
        KeyValue::Get { key } | KeyValue::Remove { key } => {
            let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + key.len());
            frame.put_u8(record.kind().tag());
            frame.put_u32(key.len() as u32);
            frame.put_slice(key);
            frame
        }
        KeyValue::Set { key, value } => {
            let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + key.len() + 4 + value.len());
            frame.put_u8(KeyValueType::Set.tag());
            frame.put_u32(key.len() as u32);
            frame.put_slice(key);
            frame.put_u32(value.len() as u32);
            frame.put_slice(value);
            frame
        }
    }
}

/// Decode a key-value record from bytes, with default limits
///
/// The input must hold exactly one frame.
pub fn decode_record(bytes: &[u8]) -> Result<KeyValue> {
    decode_record_with(bytes, &Limits::default())
}

/// Decode a key-value record from bytes
pub fn decode_record_with(bytes: &[u8], limits: &Limits) -> Result<KeyValue> {
    let mut buf = bytes;

    if buf.remaining() < FRAME_HEADER_SIZE {
        return Err(WireError::Malformed(format!(
            "Incomplete record header: expected {} bytes, got {}",
            FRAME_HEADER_SIZE,
            buf.remaining()
        )));
    }

    let kind = KeyValueType::from_tag(buf.get_u8())?;

    let key_len = buf.get_u32() as usize;
    if key_len > limits.max_payload_size {
        return Err(WireError::Malformed(format!(
            "Key length {} exceeds limit {}",
            key_len, limits.max_payload_size
        )));
    }
    if buf.remaining() < key_len {
        return Err(WireError::Malformed(format!(
            "Incomplete key: expected {} bytes, got {}",
            key_len,
            buf.remaining()
        )));
    }
    let key = buf[..key_len].to_vec();
    buf.advance(key_len);

    let record = match kind {
        KeyValueType::Get => KeyValue::Get { key },
        KeyValueType::Remove => KeyValue::Remove { key },
        KeyValueType::Set => {
            // A set frame that stops at the key would force the decoder to
            // invent the value section from defaults; refuse to guess.
            if !buf.has_remaining() {
                return Err(WireError::AmbiguousValue);
            }
            if buf.remaining() < 4 {
                return Err(WireError::Malformed(format!(
                    "Incomplete value length prefix: expected 4 bytes, got {}",
                    buf.remaining()
                )));
            }
            let value_len = buf.get_u32() as usize;
            if value_len > limits.max_payload_size {
                return Err(WireError::Malformed(format!(
                    "Value length {} exceeds limit {}",
                    value_len, limits.max_payload_size
                )));
            }
            if buf.remaining() < value_len {
                return Err(WireError::Malformed(format!(
                    "Incomplete value: expected {} bytes, got {}",
                    value_len,
                    buf.remaining()
                )));
            }
            let value = buf[..value_len].to_vec();
            buf.advance(value_len);
            KeyValue::Set { key, value }
        }
    };

    if buf.has_remaining() {
        return Err(WireError::Malformed(format!(
            "Trailing bytes after record frame: {}",
            buf.remaining()
        )));
    }

    Ok(record)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete command option from a stream
///
/// Blocks until a complete frame is received or an error occurs
pub fn read_option<R: Read>(reader: &mut R) -> Result<CommandOption> {
    read_option_with(reader, &Limits::default())
}

/// Read a complete command option from a stream, with explicit limits
pub fn read_option_with<R: Read>(reader: &mut R, limits: &Limits) -> Result<CommandOption> {
    let mut header = [0u8; FRAME_HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]) as usize;
    if payload_len > limits.max_payload_size {
        return Err(WireError::Malformed(format!(
            "Option payload length {} exceeds limit {}",
            payload_len, limits.max_payload_size
        )));
    }

    let mut rest = vec![0u8; payload_len + VALUE_SIZE];
    reader.read_exact(&mut rest)?;

    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + rest.len());
    frame.extend_from_slice(&header);
    frame.extend_from_slice(&rest);

    decode_option_with(&frame, limits)
}

/// Write a command option to a stream
pub fn write_option<W: Write>(writer: &mut W, option: &CommandOption) -> Result<()> {
    let bytes = encode_option(option);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete key-value record from a stream
pub fn read_record<R: Read>(reader: &mut R) -> Result<KeyValue> {
    read_record_with(reader, &Limits::default())
}

/// Read a complete key-value record from a stream, with explicit limits
pub fn read_record_with<R: Read>(reader: &mut R, limits: &Limits) -> Result<KeyValue> {
    let mut header = [0u8; FRAME_HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let kind = KeyValueType::from_tag(header[0])?;

    let key_len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]) as usize;
    if key_len > limits.max_payload_size {
        return Err(WireError::Malformed(format!(
            "Key length {} exceeds limit {}",
            key_len, limits.max_payload_size
        )));
    }
    let mut key = vec![0u8; key_len];
    reader.read_exact(&mut key)?;

    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + key_len);
    frame.extend_from_slice(&header);
    frame.extend_from_slice(&key);

    // Only a SET frame continues past the key.
    if kind == KeyValueType::Set {
        let mut len_buf = [0u8; 4];
        reader.read_exact(&mut len_buf)?;
        let value_len = u32::from_be_bytes(len_buf) as usize;
        if value_len > limits.max_payload_size {
            return Err(WireError::Malformed(format!(
                "Value length {} exceeds limit {}",
                value_len, limits.max_payload_size
            )));
        }
        let mut value = vec![0u8; value_len];
        reader.read_exact(&mut value)?;

        frame.extend_from_slice(&len_buf);
        frame.extend_from_slice(&value);
    }

    decode_record_with(&frame, limits)
}

/// Write a key-value record to a stream
pub fn write_record<W: Write>(writer: &mut W, record: &KeyValue) -> Result<()> {
    let bytes = encode_record(record);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
