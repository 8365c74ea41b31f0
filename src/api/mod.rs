//! API module for communication between the search UI and the notes server.
//!
//! The server speaks JSON over HTTP. The UI only depends on the
//! [`SearchBackend`] trait, so tests can swap the HTTP client for a fake.

pub mod client;
pub mod protocol;

pub use client::{HttpClient, SearchBackend};
pub use protocol::*;
