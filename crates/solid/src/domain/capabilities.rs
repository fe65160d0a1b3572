//! Capabilities - General view and narrow capability traits
//!
//! `PersonInfo` is the general-purpose view every record kind exposes.
//! `Compensable` is only implemented by record kinds that carry salary data;
//! callers holding a `PersonInfo` ask for it through `as_compensable`.

/// General-purpose view over any person-like record
pub trait PersonInfo {
    /// Name used when addressing the record
    fn full_name(&self) -> &str;

    /// Age in years
    fn age(&self) -> i32;

    /// Greeting built from name and age only
    fn introduce(&self) -> String {
        format!(
            "Hello, I am {} and I am {} years old.",
            self.full_name(),
            self.age()
        )
    }

    /// Salary capability, if this record kind has one
    fn as_compensable(&self) -> Option<&dyn Compensable> {
        None
    }
}

/// Narrow capability for records that carry real salary data
pub trait Compensable {
    fn calculate_salary(&self) -> f64;
}
