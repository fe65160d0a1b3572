//! Employee Application Service (Use Case)

use std::sync::Arc;

use solid::{mapper, DomainError, Employee, EmployeeRepository, EmployeeRequest, PersonId};

/// Application service for Employee operations
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Map the request to an Employee and persist it
    pub async fn create_employee(
        &self,
        request: EmployeeRequest,
    ) -> Result<Employee, DomainError> {
        let employee = mapper::to_employee(request);
        let saved = self.repo.save(&employee).await?;

        tracing::info!(
            id = ?saved.id(),
            employee_id = %saved.employee_id(),
            "Created Employee"
        );

        Ok(saved)
    }

    /// Get an Employee by ID
    pub async fn get_by_id(&self, id: PersonId) -> Result<Option<Employee>, DomainError> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solid::{Compensable, PersonInfo};
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryEmployeeRepository {
        rows: Mutex<Vec<Employee>>,
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let mut stored = employee.clone();
            match stored.id() {
                Some(id) => rows.retain(|e| e.id() != Some(id)),
                None => stored.assign_id(rows.len() as PersonId + 1)?,
            }
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn find_by_id(&self, id: PersonId) -> Result<Option<Employee>, DomainError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|e| e.id() == Some(id)).cloned())
        }
    }

    #[tokio::test]
    async fn test_create_employee() {
        let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));

        let saved = service
            .create_employee(EmployeeRequest {
                name: "Bob".to_string(),
                age: 25,
                address: "Elm St 2".to_string(),
                employee_id: "EMP123".to_string(),
                salary: 5200.5,
            })
            .await
            .unwrap();

        assert_eq!(saved.id(), Some(1));
        assert_eq!(saved.full_name(), "Bob");
        assert_eq!(saved.calculate_salary(), 5200.5);

        let found = service.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.employee_id(), "EMP123");
    }
}
