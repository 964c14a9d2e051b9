pub use self::roster::Roster;
pub use self::student::Student;

mod roster;
mod student;
