//! PostgreSQL implementation of EmployeeRepository
//!
//! Joined-table mapping: every `employee` row extends a `person` row with
//! the same id, so Person and Employee share one identity space.

use async_trait::async_trait;
use sqlx::PgPool;

use solid::{DomainError, Employee, EmployeeRepository, Person, PersonId, PersonInfo};

/// PostgreSQL implementation of EmployeeRepository
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    age: i32,
    address: Option<String>,
    employee_id: String,
    salary: f64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let person = Person::restore(row.id, row.name, row.age, row.address);
        Employee::from_person(person, row.employee_id, row.salary)
    }
}

const SELECT_EMPLOYEE: &str = r#"
    SELECT p.id, p.name, p.age, p.address, e.employee_id, e.salary
    FROM employee e
    JOIN person p ON p.id = e.id
    WHERE e.id = $1
"#;

fn repo_err(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let person = employee.person();
        let mut tx = self.pool.begin().await.map_err(repo_err)?;

        let id = match employee.id() {
            Some(id) => {
                let updated = sqlx::query(
                    "UPDATE person SET name = $2, age = $3, address = $4 WHERE id = $1",
                )
                .bind(id)
                .bind(person.name())
                .bind(person.age())
                .bind(person.address())
                .execute(&mut *tx)
                .await
                .map_err(repo_err)?;

                if updated.rows_affected() == 0 {
                    return Err(DomainError::not_found("Employee", id));
                }

                sqlx::query("UPDATE employee SET employee_id = $2, salary = $3 WHERE id = $1")
                    .bind(id)
                    .bind(employee.employee_id())
                    .bind(employee.salary())
                    .execute(&mut *tx)
                    .await
                    .map_err(repo_err)?;

                id
            }
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO person (name, age, address) VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(person.name())
                .bind(person.age())
                .bind(person.address())
                .fetch_one(&mut *tx)
                .await
                .map_err(repo_err)?;

                sqlx::query("INSERT INTO employee (id, employee_id, salary) VALUES ($1, $2, $3)")
                    .bind(id)
                    .bind(employee.employee_id())
                    .bind(employee.salary())
                    .execute(&mut *tx)
                    .await
                    .map_err(repo_err)?;

                id
            }
        };

        let row = sqlx::query_as::<_, EmployeeRow>(SELECT_EMPLOYEE)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(repo_err)?;

        tx.commit().await.map_err(repo_err)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Employee>, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>(SELECT_EMPLOYEE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repo_err)?;

        Ok(row.map(Into::into))
    }
}
