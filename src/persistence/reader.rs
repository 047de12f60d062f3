//! Data file reader
//!
//! Parses the flat file line by line. A bad line is logged and skipped; it
//! never aborts the load.

use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use super::{FIELD_COUNT, NUMERIC_FIELDS};
use crate::error::Result;
use crate::record::Student;

/// Outcome of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Whether the data file could be opened at all
    pub file_found: bool,

    /// Number of students loaded
    pub records_loaded: usize,

    /// Number of non-blank lines skipped (wrong field count, bad number,
    /// invalid UTF-8, or repeated id)
    pub lines_skipped: usize,
}

/// Read every valid student from `path`
///
/// A missing or unreadable file is not an error: it yields an empty
/// collection with `file_found == false`. Whitespace around the numeric
/// fields is ignored; text fields are kept verbatim. Only an I/O failure in the middle
/// of reading an open file is returned as `Err`.
pub fn read_students(path: &Path) -> Result<(Vec<Student>, LoadReport)> {
    let mut report = LoadReport::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                debug!(path = %path.display(), "data file does not exist, starting empty");
            } else {
                warn!(path = %path.display(), error = %e, "data file unreadable, starting empty");
            }
            return Ok((Vec::new(), report));
        }
    };
    report.file_found = true;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut students: Vec<Student> = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, error = %e, "skipping unreadable line");
                report.lines_skipped += 1;
                continue;
            }
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }

        if record.len() != FIELD_COUNT {
            warn!(
                line,
                fields = record.len(),
                content = %join_fields(&record),
                "skipping line with wrong field count"
            );
            report.lines_skipped += 1;
            continue;
        }

        let student: Student = match trim_numeric_fields(&record).deserialize(None) {
            Ok(student) => student,
            Err(e) => {
                warn!(line, error = %e, content = %join_fields(&record), "skipping malformed line");
                report.lines_skipped += 1;
                continue;
            }
        };

        if !seen_ids.insert(student.id()) {
            warn!(line, id = student.id(), "skipping line with repeated id");
            report.lines_skipped += 1;
            continue;
        }

        students.push(student);
    }

    report.records_loaded = students.len();
    debug!(
        path = %path.display(),
        loaded = report.records_loaded,
        skipped = report.lines_skipped,
        "data file read"
    );

    Ok((students, report))
}

fn trim_numeric_fields(record: &StringRecord) -> StringRecord {
    record
        .iter()
        .enumerate()
        .map(|(i, field)| if NUMERIC_FIELDS.contains(&i) { field.trim() } else { field })
        .collect()
}

fn join_fields(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
