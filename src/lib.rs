//! # respcli
//!
//! A command-line client for Redis-compatible servers with:
//! - A RESP request encoder (array of bulk strings)
//! - A blocking reply decoder with one-byte lookahead dispatch
//! - Null and empty kept distinct at every level
//! - Human-readable reply formatting
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (respcli binary)                     │
//! │              (one-shot command or interactive)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Client                                │
//! │               (TcpStream, BufReader/BufWriter)               │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │ encode_command                   │ decode_reply
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌─────────────────┐
//!   │  Frame Encoder  │               │   Dispatcher    │
//!   │  (*N / $len)    │               │  (peek 1 byte)  │
//!   └─────────────────┘               └────┬───────┬────┘
//!                                          │       │
//!                                          ▼       ▼
//!                                    ┌────────┐ ┌───────────┐
//!                                    │ Scalar │ │ Aggregate │
//!                                    └────┬───┘ └─────┬─────┘
//!                                         └─────┬─────┘
//!                                               ▼
//!                                     Reply ──► format()
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RespError, Result};
pub use config::Config;
pub use network::Client;
pub use protocol::{Command, Reply};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respcli
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
