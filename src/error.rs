//! Error types for studentdb
//!
//! Provides a unified error type for all operations. The `Display` text of
//! each variant doubles as the user-facing diagnostic.

use thiserror::Error;

/// Result type alias using StudentDbError
pub type Result<T> = std::result::Result<T, StudentDbError>;

/// Unified error type for studentdb operations
#[derive(Debug, Error)]
pub enum StudentDbError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("student id {0} already exists")]
    DuplicateId(i32),

    #[error("no student with id {0}")]
    NotFound(i32),

    #[error("cannot change student id {id} to {new_id}: id {new_id} is already taken")]
    IdConflict { id: i32, new_id: i32 },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Data file error: {0}")]
    Csv(#[from] csv::Error),
}
