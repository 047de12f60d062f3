//! Student record
//!
//! Plain value type. Field order matches the on-disk column order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One student's record
///
/// Two students compare equal when their ids match, whatever the other
/// fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique key within a store
    id: i32,

    name: String,

    age: i32,

    gender: String,

    major: String,

    /// Grade point average (range not enforced)
    gpa: f64,
}

impl Student {
    /// Create a new student record
    pub fn new(
        id: i32,
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        major: impl Into<String>,
        gpa: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
            major: major.into(),
            gpa,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Change the id. Only affects this value; a store never renumbers
    /// records on its own.
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = gender.into();
    }

    pub fn set_major(&mut self, major: impl Into<String>) {
        self.major = major.into();
    }

    pub fn set_gpa(&mut self, gpa: f64) {
        self.gpa = gpa;
    }

    /// Compare every field, not just the id
    pub fn same_fields(&self, other: &Student) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.age == other.age
            && self.gender == other.gender
            && self.major == other.major
            && self.gpa == other.gpa
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:>8} | Name: {:>10} | Age: {:>3} | Gender: {:>4} | Major: {:>15} | GPA: {:.2}",
            self.id, self.name, self.age, self.gender, self.major, self.gpa
        )
    }
}
