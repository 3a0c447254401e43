//! Error types for constructor-time failures.
//!
//! Ordinary chess outcomes (a rejected move, a terminal position) are
//! not errors — they are plain `bool`/enum return values, per the
//! contract in `position` and `search`. `EngineError` exists only for
//! the narrow set of things that can go wrong before a game is even
//! under way: misconfiguring the engine, or handing the opening book
//! malformed data.

use thiserror::Error;

/// Errors produced while constructing engine-level objects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `EngineConfig::new` was asked for a zero search depth.
    #[error("max_depth must be at least 1 ply")]
    ZeroDepth,

    /// `EngineConfig::new` was asked for zero root-search workers.
    #[error("worker_count must be at least 1")]
    ZeroWorkers,
}

/// Convenience alias for fallible engine construction.
pub type EngineResult<T> = Result<T, EngineError>;
