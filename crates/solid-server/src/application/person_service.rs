//! Person Application Service (Use Case)
//!
//! Orchestrates mapper and repository for Person management. No transport
//! or formatting concerns live here.

use std::sync::Arc;

use solid::{mapper, DomainError, Person, PersonId, PersonRepository, PersonRequest};

/// Application service for Person operations
pub struct PersonService<R: PersonRepository> {
    repo: Arc<R>,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Map the request to a record and persist it
    pub async fn create_person(&self, request: PersonRequest) -> Result<Person, DomainError> {
        let person = mapper::to_person(request);
        let saved = self.repo.save(&person).await?;

        tracing::info!(id = ?saved.id(), "Created Person: {}", saved.name());

        Ok(saved)
    }

    /// Get a Person by ID
    pub async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Get all Persons
    pub async fn list_all(&self) -> Result<Vec<Person>, DomainError> {
        self.repo.find_all().await
    }
}
