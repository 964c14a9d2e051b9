use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub name: String,
    pub grade: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    /// Comparator putting the highest grade first.
    pub fn by_grade_descending(a: &Student, b: &Student) -> Ordering {
        b.grade.total_cmp(&a.grade)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.grade)
    }
}

#[test]
fn test_by_grade_descending() {
    let high = Student::new("Bob", 95.0);
    let low = Student::new("Carol", 72.0);
    assert_eq!(Student::by_grade_descending(&high, &low), Ordering::Less);
    assert_eq!(Student::by_grade_descending(&low, &high), Ordering::Greater);
    assert_eq!(
        Student::by_grade_descending(&high, &Student::new("Dan", 95.0)),
        Ordering::Equal
    );
}
