//! Store Module
//!
//! The in-memory student collection bound to a data file.
//!
//! ## Responsibilities
//! - Keep student ids unique at all times
//! - CRUD by id, with order-preserving delete
//! - Filters and detached searches (linear scan)
//! - Stable in-place sorts
//! - Aggregate statistics
//! - Load from / save to the bound file
//!
//! ## Data Structure Choice
//! A plain `Vec<Student>` in insertion order. Collections are small and fully
//! resident, so every lookup is a linear scan.

mod manager;
mod stats;

pub use manager::{SortKey, StudentStore};
pub use stats::Statistics;
