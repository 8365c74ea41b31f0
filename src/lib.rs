//! NoteSeek - Desktop client for semantic PDF notes search.
//!
//! This library provides the client side of the notes search server:
//! the HTTP API client, the search controller that turns one query into
//! one request and reflects the outcome in UI state, configuration
//! loading, and the egui search window.

pub mod api;
pub mod config;
pub mod controller;
pub mod ui;

use thiserror::Error;

/// NoteSeek error types covering all failure modes.
#[derive(Error, Debug)]
pub enum NoteSeekError {
    /// Transport errors (connection refused, reset, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration file errors
    #[error("Config error: {0}")]
    Config(String),

    /// Server URL or result link could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Opening a link or touching the clipboard failed
    #[error("Action failed: {0}")]
    Action(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using NoteSeekError
pub type Result<T> = std::result::Result<T, NoteSeekError>;
