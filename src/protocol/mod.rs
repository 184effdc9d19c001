//! Protocol Module
//!
//! RESP request encoding and reply decoding.
//!
//! ## Request Format
//! Every request is an array of bulk strings, command name first:
//! ```text
//! *<count>\r\n
//! $<len>\r\n<name>\r\n
//! $<len>\r\n<arg 1>\r\n
//! ...
//! ```
//!
//! ### Reply Leading Bytes
//! - `+` status      `+OK\r\n`
//! - `-` error       `-ERR unknown command\r\n`
//! - `:` integer     `:42\r\n`
//! - `$` bulk string `$3\r\nfoo\r\n`, `$-1\r\n` is null
//! - `*` array       `*2\r\n$3\r\nfoo\r\n$-1\r\n`, `*-1\r\n` is null
//!
//! Status, error and integer replies are decoded to the same raw-text
//! scalar; only the array marker selects the aggregate shape.

mod command;
mod reply;
mod transport;
mod codec;

pub use command::Command;
pub use reply::Reply;
pub use transport::{Transport, MAX_LINE_LEN};
pub use codec::{
    decode_aggregate, decode_reply, decode_scalar, encode_command, write_command, FrameKind,
    MAX_BULK_LEN,
};
