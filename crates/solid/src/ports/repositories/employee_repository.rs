//! Employee Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Employee, PersonId};

/// Repository interface for Employee records
///
/// Employees share the Person identity space.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Save an Employee (insert when it has no identity, update otherwise)
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError>;

    /// Find an Employee by its Person ID
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Employee>, DomainError>;
}
