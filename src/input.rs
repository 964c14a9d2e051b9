use crate::model::{Roster, Student};
use eyre::{Result, WrapErr, bail, eyre};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, trace};

/// Interactive reader: writes prompts to `output` and reads
/// whitespace-separated tokens from `input`, regardless of line layout.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").wrap_err("cannot write prompt")?;
        self.output.flush().wrap_err("cannot flush prompt")
    }

    fn next_token(&mut self, what: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .wrap_err_with(|| format!("cannot read {what}"))?
                == 0
            {
                bail!("unexpected end of input while reading {what}");
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }

    fn read<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token(what)?;
        token
            .parse()
            .map_err(|e| eyre!("cannot parse {what}: {token:?} ({e})"))
    }

    pub fn read_count(&mut self) -> Result<usize> {
        self.prompt("Enter number of students: ")?;
        let n: i64 = self.read("number of students")?;
        if n < 0 {
            bail!("number of students cannot be negative: {n}");
        }
        let n = usize::try_from(n)?;
        debug!(students = n, "number of students announced");
        Ok(n)
    }

    pub fn collect(&mut self, n: usize) -> Result<Roster> {
        let mut roster = Roster::default();
        for i in 1..=n {
            self.prompt(&format!("Enter name of student {i}: "))?;
            let name: String = self.read(&format!("name of student {i}"))?;
            self.prompt("Enter grade: ")?;
            let grade: f64 = self.read(&format!("grade of student {i}"))?;
            let student = Student::new(name, grade);
            trace!(index = i, student = %student, "student has been recorded");
            roster.push(student);
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_read_count_and_collect() {
        let mut c = console("2\nAlice 88\nBob\n\n  95.5\n");
        let n = c.read_count().unwrap();
        assert_eq!(n, 2);
        let roster = c.collect(n).unwrap();
        assert_eq!(
            roster.students,
            vec![Student::new("Alice", 88.0), Student::new("Bob", 95.5)]
        );
        assert_eq!(
            String::from_utf8(c.output).unwrap(),
            "Enter number of students: Enter name of student 1: Enter grade: \
             Enter name of student 2: Enter grade: "
        );
    }

    #[test]
    fn test_tokens_on_one_line() {
        let mut c = console("3 a 1 b -2 c 1e2");
        let n = c.read_count().unwrap();
        let roster = c.collect(n).unwrap();
        assert_eq!(roster.grades().collect::<Vec<_>>(), vec![1.0, -2.0, 100.0]);
    }

    #[test]
    fn test_zero_students() {
        let mut c = console("0\n");
        let n = c.read_count().unwrap();
        assert!(c.collect(n).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_count() {
        let err = console("three\n").read_count().unwrap_err();
        assert!(err.to_string().contains("number of students"));
    }

    #[test]
    fn test_negative_count() {
        let err = console("-1\n").read_count().unwrap_err();
        assert!(err.to_string().contains("cannot be negative"));
    }

    #[test]
    fn test_malformed_grade() {
        let err = console("Alice abc\n").collect(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot parse grade of student 1: \"abc\" (invalid float literal)"
        );
    }

    #[test]
    fn test_early_end_of_input() {
        let err = console("Alice 88\nBob").collect(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading grade of student 2"
        );
    }

    #[test]
    fn test_huge_count_does_not_preallocate() {
        let mut c = console("1000000000000000000\nAlice 88\n");
        let n = c.read_count().unwrap();
        let err = c.collect(n).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading name of student 2"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(console("").read_count().is_err());
    }
}
