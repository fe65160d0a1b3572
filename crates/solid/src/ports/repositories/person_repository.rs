//! Person Repository Port
//!
//! Abstract interface for Person persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Person, PersonId};

/// Repository interface for Person records
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Save a Person.
    ///
    /// A record without identity is inserted and comes back with a freshly
    /// assigned one; a record with identity is updated in place.
    async fn save(&self, person: &Person) -> Result<Person, DomainError>;

    /// Find a Person by ID
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, DomainError>;

    /// Find all Persons, oldest first
    async fn find_all(&self) -> Result<Vec<Person>, DomainError>;
}
