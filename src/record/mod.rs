//! Record Module
//!
//! Value types for a single student.
//!
//! ## Responsibilities
//! - Hold one student's fields
//! - Identity by student id (equality ignores every other field)
//! - Single-line aligned rendering for listings
//! - Partial edits via [`StudentPatch`]

mod patch;
mod student;

pub use patch::{StudentPatch, UNCHANGED_NUMBER};
pub use student::Student;
