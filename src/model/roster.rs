use super::Student;
use crate::display::format_grade;
use std::cmp::Ordering;
use std::io::{self, Write};

#[derive(Clone, Debug, Default)]
pub struct Roster {
    pub students: Vec<Student>,
}

impl Roster {
    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn grades(&self) -> impl Iterator<Item = f64> + '_ {
        self.students.iter().map(|s| s.grade)
    }

    /// Stable sort, so students with equal keys keep their input order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Student, &Student) -> Ordering,
    {
        self.students.sort_by(compare);
    }

    pub fn sort_descending(&mut self) {
        self.sort_by(Student::by_grade_descending);
    }

    /// One report line per student, in current roster order.
    pub fn lines(&self, precision: usize) -> impl Iterator<Item = String> + '_ {
        self.students.iter().map(move |s| {
            format!("Name: {}, Grade: {}", s.name, format_grade(s.grade, precision))
        })
    }

    pub fn print_all<W: Write>(&self, out: &mut W, precision: usize) -> io::Result<()> {
        for line in self.lines(precision) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}
