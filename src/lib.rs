//! Simone Sync - preview Atlassian requests for a Simone workspace.
//!
//! This library provides the core functionality for the `sas` CLI tool:
//! configuration loading with default fallback, milestone metadata
//! extraction, and construction of the tracker/doc-space request payloads.
//!
//! No network I/O is performed anywhere in this crate. Every command is a
//! read-only preview of the request that *would* be sent; the `sync`
//! section of the configuration (intervals, retries, conflict policy) is
//! parsed and echoed but drives no behavior.

pub mod action_log;
pub mod cli;
pub mod commands;
pub mod config;
pub mod milestone;
pub mod payload;
pub mod workspace;

/// Library-level error type for sync-preview operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for sync-preview operations.
pub type Result<T> = std::result::Result<T, Error>;
