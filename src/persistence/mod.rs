//! Persistence Module
//!
//! Flat-file storage for a student collection.
//!
//! ## Responsibilities
//! - Load every well-formed line into memory, skipping the rest
//! - Replace the data file atomically on save
//! - Report what was loaded and what was skipped
//!
//! ## File Format
//! ```text
//! ┌──────┬────────┬───────┬──────────┬─────────┬───────┐
//! │  id  │  name  │  age  │  gender  │  major  │  gpa  │   one line per student
//! └──────┴────────┴───────┴──────────┴─────────┴───────┘
//! 20210001,Zhang San,20,M,Computer Science,3.8
//! 20210002,Li Si,19,F,Software Engineering,3.9
//! ```
//!
//! Whitespace around id, age and gpa is tolerated on load.
//! No header row, no quoting, no escaping. A text field containing a comma
//! or a newline cannot be stored faithfully.

mod reader;
mod writer;

pub use reader::{read_students, LoadReport};
pub use writer::write_students;

/// Number of comma-separated fields on every data line
pub const FIELD_COUNT: usize = 6;

/// Column positions of id, age and gpa
const NUMERIC_FIELDS: [usize; 3] = [0, 2, 5];
