//! Protocol codec
//!
//! Encoding of requests and decoding of replies.
//!
//! Decoders consume exactly one frame from the transport, so a stream
//! holding several replies can be decoded call after call. A failed decode
//! returns only the error; no partial reply is ever handed back.

use std::io::Write;

use bytes::{BufMut, Bytes, BytesMut};

use super::{Command, Reply, Transport};
use crate::error::{RespError, Result};

/// Line terminator for every header and payload
pub const CRLF: &[u8; 2] = b"\r\n";

/// Largest bulk string accepted from the server (512 MB)
pub const MAX_BULK_LEN: i64 = 512 * 1024 * 1024;

/// Largest element count pre-allocated for an array reply
const MAX_PREALLOC_ELEMENTS: usize = 1024;

/// Frame kinds, identified by the leading byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameKind {
    Status = b'+',
    Error = b'-',
    Integer = b':',
    Bulk = b'$',
    Array = b'*',
}

impl TryFrom<u8> for FrameKind {
    type Error = RespError;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            b'+' => Ok(FrameKind::Status),
            b'-' => Ok(FrameKind::Error),
            b':' => Ok(FrameKind::Integer),
            b'$' => Ok(FrameKind::Bulk),
            b'*' => Ok(FrameKind::Array),
            _ => Err(RespError::protocol(format!(
                "Unknown reply type byte: 0x{:02x}",
                byte
            ))),
        }
    }
}

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a command as an array of bulk strings
///
/// Format: `*<1 + args>\r\n` then `$<len>\r\n<bytes>\r\n` per part
pub fn encode_command(command: &Command) -> Bytes {
    let payload_len: usize = command.parts().map(|part| part.len() + 16).sum();
    let mut buf = BytesMut::with_capacity(16 + payload_len);

    put_header(&mut buf, FrameKind::Array, command.part_count());
    for part in command.parts() {
        put_header(&mut buf, FrameKind::Bulk, part.len());
        buf.put_slice(part);
        buf.put_slice(CRLF);
    }

    buf.freeze()
}

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let bytes = encode_command(command);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

fn put_header(buf: &mut BytesMut, kind: FrameKind, len: usize) {
    buf.put_u8(kind as u8);
    buf.put_slice(len.to_string().as_bytes());
    buf.put_slice(CRLF);
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Decode one reply, choosing the shape from the leading byte
///
/// The leading byte is only peeked here; the selected decoder reads it.
pub fn decode_reply<T: Transport + ?Sized>(src: &mut T) -> Result<Reply> {
    if src.peek_byte()? == FrameKind::Array as u8 {
        Ok(Reply::Aggregate(decode_aggregate(src)?))
    } else {
        Ok(Reply::Scalar(decode_scalar(src)?))
    }
}

/// Decode one status, error, integer or bulk string reply
///
/// Returns `None` for a null bulk string (`$-1`).
pub fn decode_scalar<T: Transport + ?Sized>(src: &mut T) -> Result<Option<Bytes>> {
    let kind = read_kind(src)?;

    match kind {
        FrameKind::Status | FrameKind::Error | FrameKind::Integer => {
            let line = src.read_line_crlf()?;
            tracing::trace!("Decoded {:?} reply ({} bytes)", kind, line.len());
            Ok(Some(line))
        }
        FrameKind::Bulk => {
            let len = read_length(src, "bulk")?;
            if len == -1 {
                return Ok(None);
            }
            if len > MAX_BULK_LEN {
                return Err(RespError::protocol(format!(
                    "Bulk string too large: {} bytes (max {})",
                    len, MAX_BULK_LEN
                )));
            }

            let len = len as usize;
            let block = src.read_exact_bytes(len + CRLF.len())?;
            if &block[len..] != CRLF {
                return Err(RespError::protocol(format!(
                    "Bulk string of {} bytes not terminated by CRLF",
                    len
                )));
            }

            Ok(Some(block.slice(..len)))
        }
        FrameKind::Array => Err(RespError::protocol(
            "Nested array where a scalar was expected",
        )),
    }
}

/// Decode one array reply whose elements are scalars
///
/// Returns `None` for a null array (`*-1`) and an empty vector for `*0`.
pub fn decode_aggregate<T: Transport + ?Sized>(src: &mut T) -> Result<Option<Vec<Option<Bytes>>>> {
    let kind = read_kind(src)?;
    if kind != FrameKind::Array {
        return Err(RespError::protocol(format!(
            "Expected array reply, got {:?}",
            kind
        )));
    }

    let count = read_length(src, "array")?;
    if count == -1 {
        return Ok(None);
    }

    let count = usize::try_from(count)
        .map_err(|_| RespError::protocol(format!("Array count out of range: {}", count)))?;

    let mut elements = Vec::with_capacity(count.min(MAX_PREALLOC_ELEMENTS));
    for _ in 0..count {
        elements.push(decode_scalar(src)?);
    }

    tracing::trace!("Decoded array reply with {} elements", elements.len());
    Ok(Some(elements))
}

fn read_kind<T: Transport + ?Sized>(src: &mut T) -> Result<FrameKind> {
    FrameKind::try_from(src.read_byte()?)
}

/// Read a length line; `-1` is the only negative value allowed
fn read_length<T: Transport + ?Sized>(src: &mut T, what: &str) -> Result<i64> {
    let line = src.read_line_crlf()?;

    let len = std::str::from_utf8(&line)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            RespError::protocol(format!(
                "Invalid {} length: {:?}",
                what,
                String::from_utf8_lossy(&line)
            ))
        })?;

    if len < -1 {
        return Err(RespError::protocol(format!(
            "Negative {} length: {}",
            what, len
        )));
    }

    Ok(len)
}
