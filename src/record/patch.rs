//! Partial edits
//!
//! A patch names the fields to change and leaves the rest alone. Edit flows
//! that prompt field by field use sentinels for "keep": an empty string for
//! text, `-1` for numbers. [`StudentPatch::from_sentinels`] turns those into
//! `None`.

use super::Student;

/// Numeric sentinel meaning "leave this field unchanged"
pub const UNCHANGED_NUMBER: i32 = -1;

/// Set of field changes for one student. `None` keeps the current value.
///
/// The id is not patchable; use [`crate::StudentStore::update`] to renumber.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
}

impl StudentPatch {
    /// Build a patch from menu-style input
    pub fn from_sentinels(name: &str, age: i32, gender: &str, major: &str, gpa: f64) -> Self {
        Self {
            name: text_change(name),
            age: (age != UNCHANGED_NUMBER).then_some(age),
            gender: text_change(gender),
            major: text_change(major),
            gpa: (gpa != f64::from(UNCHANGED_NUMBER)).then_some(gpa),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    /// True when applying the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.major.is_none()
            && self.gpa.is_none()
    }

    /// Write the set fields into `student`
    pub fn apply_to(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.set_name(name.as_str());
        }
        if let Some(age) = self.age {
            student.set_age(age);
        }
        if let Some(gender) = &self.gender {
            student.set_gender(gender.as_str());
        }
        if let Some(major) = &self.major {
            student.set_major(major.as_str());
        }
        if let Some(gpa) = self.gpa {
            student.set_gpa(gpa);
        }
    }
}

fn text_change(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
