//! Network Module
//!
//! TCP client handling.
//!
//! ## Model
//! - One connection per client
//! - Strictly request then reply, no pipelining
//! - No reconnection or retries; every error surfaces to the caller

mod client;

pub use client::Client;
