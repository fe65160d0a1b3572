//! Substitutability demonstration
//!
//! Introduces Alice (a Person), then Bob (an Employee) through his concrete
//! type, then Bob again through the general `PersonInfo` view. The last two
//! are identical, which is exactly the problem: a caller that only knows the
//! general view still gets the employee line.

use crate::domain::{Employee, Person, PersonInfo};

/// One introduction in the demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoEntry {
    pub label: &'static str,
    pub output: String,
}

pub fn substitutability_transcript() -> Vec<DemoEntry> {
    let alice = Person::new("Alice", 30);
    let employee = Employee::new("Bob", 25, "EMP123");
    let bob: Box<dyn PersonInfo> = Box::new(Employee::new("Bob", 25, "EMP123"));

    vec![
        DemoEntry {
            label: "Person",
            output: alice.introduce(),
        },
        DemoEntry {
            label: "Employee",
            output: employee.introduce(),
        },
        DemoEntry {
            label: "Employee as Person",
            output: bob.introduce(),
        },
    ]
}
