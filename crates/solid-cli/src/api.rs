//! SOLID API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// API Client for the SOLID example server
pub struct SolidClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct PersonResponse {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeResponse {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub employee_id: String,
    pub salary: f64,
}

#[derive(Debug, Serialize)]
pub struct CreatePersonRequest<'a> {
    pub name: &'a str,
    pub age: i32,
    pub address: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeRequest<'a> {
    pub name: &'a str,
    pub age: i32,
    pub address: &'a str,
    pub employee_id: &'a str,
    pub salary: f64,
}

impl SolidClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Create a Person
    pub async fn create_person(&self, request: &CreatePersonRequest<'_>) -> Result<PersonResponse> {
        let resp = self
            .client
            .post(self.url("/api/persons/create"))
            .json(request)
            .send()
            .await
            .context("Failed to connect to SOLID API")?;

        parse(resp).await
    }

    /// Get a Person by ID
    pub async fn get_person(&self, id: i64) -> Result<PersonResponse> {
        let resp = self
            .client
            .get(self.url(&format!("/api/persons/{}", id)))
            .send()
            .await
            .context("Failed to connect to SOLID API")?;

        parse(resp).await
    }

    /// List all Persons
    pub async fn list_persons(&self) -> Result<Vec<PersonResponse>> {
        let resp = self
            .client
            .get(self.url("/api/persons"))
            .send()
            .await
            .context("Failed to connect to SOLID API")?;

        parse(resp).await
    }

    /// Create an Employee
    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest<'_>,
    ) -> Result<EmployeeResponse> {
        let resp = self
            .client
            .post(self.url("/api/employees/create"))
            .json(request)
            .send()
            .await
            .context("Failed to connect to SOLID API")?;

        parse(resp).await
    }

    /// Get an Employee by ID
    pub async fn get_employee(&self, id: i64) -> Result<EmployeeResponse> {
        let resp = self
            .client
            .get(self.url(&format!("/api/employees/{}", id)))
            .send()
            .await
            .context("Failed to connect to SOLID API")?;

        parse(resp).await
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }

    resp.json().await.context("Failed to parse response")
}
