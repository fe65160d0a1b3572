//! PostgreSQL implementation of PersonRepository

use async_trait::async_trait;
use sqlx::PgPool;

use solid::{DomainError, Person, PersonId, PersonInfo, PersonRepository};

/// PostgreSQL implementation of PersonRepository
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    age: i32,
    address: Option<String>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person::restore(row.id, row.name, row.age, row.address)
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn save(&self, person: &Person) -> Result<Person, DomainError> {
        let row = match person.id() {
            Some(id) => {
                sqlx::query_as::<_, PersonRow>(
                    r#"
                    UPDATE person
                    SET name = $2, age = $3, address = $4
                    WHERE id = $1
                    RETURNING id, name, age, address
                    "#,
                )
                .bind(id)
                .bind(person.name())
                .bind(person.age())
                .bind(person.address())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?
                .ok_or_else(|| DomainError::not_found("Person", id))?
            }
            None => sqlx::query_as::<_, PersonRow>(
                r#"
                INSERT INTO person (name, age, address)
                VALUES ($1, $2, $3)
                RETURNING id, name, age, address
                "#,
            )
            .bind(person.name())
            .bind(person.age())
            .bind(person.address())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?,
        };

        Ok(row.into())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, DomainError> {
        let row = sqlx::query_as::<_, PersonRow>(
            "SELECT id, name, age, address FROM person WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        let rows = sqlx::query_as::<_, PersonRow>(
            "SELECT id, name, age, address FROM person ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
