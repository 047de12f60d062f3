//! # studentdb
//!
//! An in-memory student record store with:
//! - Unique-id enforcement on every mutation
//! - Filters, substring search, stable sorts and GPA statistics
//! - Flat-file persistence with malformed-line skipping
//! - Scoped sessions that save on every exit path
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CLI (studentdb-cli)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Session                                 │
//! │            (load on open, save on close/drop)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐        ┌──────────────┐
//!               │ StudentStore │───────▶│ Persistence  │
//!               │  (Vec, ids)  │        │ (flat file)  │
//!               └──────┬───────┘        └──────────────┘
//!                      │
//!                      ▼
//!               ┌──────────────┐
//!               │   Student    │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod persistence;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StudentDbError, Result};
pub use config::{Config, DEFAULT_DATA_FILE};
pub use record::{Student, StudentPatch};
pub use store::{SortKey, Statistics, StudentStore};
pub use persistence::LoadReport;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of studentdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
