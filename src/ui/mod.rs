//! Search UI components for the NoteSeek desktop application.
//!
//! Provides the egui search window: query row, message line, and the
//! result panel with link actions.

pub mod actions;
pub mod app;
pub mod result_panel;

pub use app::SearchApp;
