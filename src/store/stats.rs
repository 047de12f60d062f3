//! Aggregate statistics over a store

use std::fmt;

use crate::record::Student;

/// Summary of a collection, borrowed from the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics<'a> {
    /// Number of students
    pub count: usize,

    /// Mean gpa, `0.0` for an empty collection
    pub average_gpa: f64,

    /// First student holding the maximum gpa
    pub highest: Option<&'a Student>,

    /// First student holding the minimum gpa
    pub lowest: Option<&'a Student>,
}

impl<'a> Statistics<'a> {
    /// Single pass over `students`; ties keep the earliest record
    pub fn compute(students: &'a [Student]) -> Self {
        let mut highest: Option<&Student> = None;
        let mut lowest: Option<&Student> = None;
        let mut total = 0.0;

        for student in students {
            total += student.gpa();
            if highest.map_or(true, |h| student.gpa() > h.gpa()) {
                highest = Some(student);
            }
            if lowest.map_or(true, |l| student.gpa() < l.gpa()) {
                lowest = Some(student);
            }
        }

        let average_gpa = if students.is_empty() {
            0.0
        } else {
            total / students.len() as f64
        };

        Self {
            count: students.len(),
            average_gpa,
            highest,
            lowest,
        }
    }
}

impl fmt::Display for Statistics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total students: {}", self.count)?;
        write!(f, "Average GPA: {:.2}", self.average_gpa)?;
        if let Some(highest) = self.highest {
            write!(f, "\nHighest GPA: {:.2} ({})", highest.gpa(), highest.name())?;
        }
        if let Some(lowest) = self.lowest {
            write!(f, "\nLowest GPA: {:.2} ({})", lowest.gpa(), lowest.name())?;
        }
        Ok(())
    }
}
