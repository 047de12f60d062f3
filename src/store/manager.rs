//! Student Store
//!
//! Owns the ordered student collection and its bound data file.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Statistics;
use crate::error::{Result, StudentDbError};
use crate::persistence::{self, LoadReport};
use crate::record::{Student, StudentPatch};

/// Orderings accepted by [`StudentStore::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending id
    Id,

    /// Ascending name (byte-wise)
    Name,

    /// Descending gpa
    Gpa,
}

/// In-memory student collection bound to a data file
///
/// ## Invariant
/// No two students in `students` share an id. Every mutating method checks
/// this before touching the collection, so a rejected call leaves the store
/// exactly as it was.
///
/// Errors are returned and also logged at `warn`; successful mutations are
/// logged at `info`.
#[derive(Debug)]
pub struct StudentStore {
    /// File used by `load` and `save`
    path: PathBuf,

    /// Students in insertion order (reordered only by the sort methods)
    students: Vec<Student>,
}

impl StudentStore {
    /// Create an empty store bound to `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            students: Vec::new(),
        }
    }

    /// Create a store bound to `path` and load whatever the file holds
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Append a student, rejecting a duplicate id
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.contains(student.id()) {
            return Err(rejected(StudentDbError::DuplicateId(student.id())));
        }

        info!(id = student.id(), "student added");
        self.students.push(student);
        Ok(())
    }

    /// Remove the student with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: i32) -> Result<Student> {
        let index = self
            .position(id)
            .ok_or_else(|| rejected(StudentDbError::NotFound(id)))?;

        let removed = self.students.remove(index);
        info!(id, "student deleted");
        Ok(removed)
    }

    /// Replace the student stored under `id` with `student`
    ///
    /// `student` may carry a different id, as long as no other record
    /// already uses it.
    pub fn update(&mut self, id: i32, student: Student) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| rejected(StudentDbError::NotFound(id)))?;

        let new_id = student.id();
        if new_id != id && self.contains(new_id) {
            return Err(rejected(StudentDbError::IdConflict { id, new_id }));
        }

        self.students[index] = student;
        info!(id, new_id, "student updated");
        Ok(())
    }

    /// Apply `patch` to the student with `id` in place
    pub fn patch(&mut self, id: i32, patch: &StudentPatch) -> Result<&Student> {
        let index = self
            .position(id)
            .ok_or_else(|| rejected(StudentDbError::NotFound(id)))?;

        patch.apply_to(&mut self.students[index]);
        info!(id, "student patched");
        Ok(&self.students[index])
    }

    /// Look up a student by id
    pub fn find(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Whether a student with `id` exists
    pub fn contains(&self, id: i32) -> bool {
        self.position(id).is_some()
    }

    // =========================================================================
    // Listing and Search
    // =========================================================================

    /// Every student in current order, or `None` when the store is empty
    pub fn list_all(&self) -> Option<&[Student]> {
        (!self.students.is_empty()).then_some(self.students.as_slice())
    }

    /// Students whose major equals `major`, or `None` when none match
    pub fn list_by_major(&self, major: &str) -> Option<Vec<&Student>> {
        non_empty(self.students.iter().filter(|s| s.major() == major).collect())
    }

    /// Students with gpa at or above `min_gpa`, or `None` when none match
    pub fn list_by_min_gpa(&self, min_gpa: f64) -> Option<Vec<&Student>> {
        non_empty(self.students.iter().filter(|s| s.gpa() >= min_gpa).collect())
    }

    /// Detached copies of students whose name contains `fragment`
    pub fn search_by_name(&self, fragment: &str) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| s.name().contains(fragment))
            .cloned()
            .collect()
    }

    /// Detached copies of students whose major equals `major`
    pub fn search_by_major(&self, major: &str) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| s.major() == major)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Mean gpa, `0.0` when empty
    pub fn average_gpa(&self) -> f64 {
        Statistics::compute(&self.students).average_gpa
    }

    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::compute(&self.students)
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Reorder by `key`. All sorts are stable.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Id => self.sort_by_id(),
            SortKey::Name => self.sort_by_name(),
            SortKey::Gpa => self.sort_by_gpa(),
        }
    }

    pub fn sort_by_id(&mut self) {
        self.students.sort_by_key(Student::id);
        info!("sorted by id");
    }

    pub fn sort_by_name(&mut self) {
        self.students.sort_by(|a, b| a.name().cmp(b.name()));
        info!("sorted by name");
    }

    /// Highest gpa first
    pub fn sort_by_gpa(&mut self) {
        self.students
            .sort_by(|a, b| gpa_order_key(b.gpa()).total_cmp(&gpa_order_key(a.gpa())));
        info!("sorted by gpa (descending)");
    }

    /// Drop every student, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.students.len();
        self.students.clear();
        info!(removed, "store cleared");
        removed
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the collection with the contents of the bound file
    ///
    /// A missing or unreadable file leaves the current collection untouched.
    /// Malformed lines are skipped and counted in the returned report.
    pub fn load(&mut self) -> Result<LoadReport> {
        let (students, report) = persistence::read_students(&self.path)?;
        if !report.file_found {
            info!(path = %self.path.display(), kept = self.students.len(), "no data file, store unchanged");
            return Ok(report);
        }
        self.students = students;

        if report.lines_skipped > 0 {
            warn!(
                path = %self.path.display(),
                skipped = report.lines_skipped,
                "some lines in the data file were skipped"
            );
        }
        info!(path = %self.path.display(), loaded = report.records_loaded, "store loaded");
        Ok(report)
    }

    /// Overwrite the bound file with the current collection
    pub fn save(&self) -> Result<usize> {
        let written = persistence::write_students(&self.path, &self.students)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "save failed");
                e
            })?;

        info!(path = %self.path.display(), written, "store saved");
        Ok(written)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The bound data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All students in current order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, id: i32) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }
}

impl<'a> IntoIterator for &'a StudentStore {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Log a rejected operation and hand the error back
fn rejected(err: StudentDbError) -> StudentDbError {
    warn!("{}", err);
    err
}

/// `-0.0` and `0.0` compare equal, so they keep their relative order
fn gpa_order_key(gpa: f64) -> f64 {
    if gpa == 0.0 {
        0.0
    } else {
        gpa
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
