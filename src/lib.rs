//! ledgr - client library and command surface for an accounting web API
//!
//! Two independent pieces: a static tool registry driving the command
//! surface, and a thin attachment facade over the remote API.

pub mod api;
pub mod config;
pub mod error;
pub mod tools;

pub use error::{LedgrError, Result};
