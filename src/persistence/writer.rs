//! Data file writer
//!
//! Writes into a temporary file next to the target, then renames it over
//! the target. Readers see either the old file or the new one, never a
//! partial write.

use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
use std::io;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::Result;
use crate::record::Student;

/// Overwrite `path` with one line per student, returning the line count
pub fn write_students(path: &Path, students: &[Student]) -> Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = create_temp(dir)?;

    // Keep the mode of the file being replaced
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(temp.as_file_mut());

        for student in students {
            writer.serialize(student)?;
        }
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), lines = students.len(), "data file written");
    Ok(students.len())
}

/// Temp file in `dir` with the usual new-file mode (0666 less umask on Unix)
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
