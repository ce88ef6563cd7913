//! Person lookup used when a session is created
//!
//! The person repository lives outside this crate; sessions only need to map
//! an email to a business unit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// The part of a person record sessions care about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub email: String,
    pub business_unit_id: Option<String>,
}

impl PersonRecord {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            business_unit_id: None,
        }
    }

    pub fn with_business_unit(mut self, business_unit_id: impl Into<String>) -> Self {
        self.business_unit_id = Some(business_unit_id.into());
        self
    }
}

/// Lookup of persons by email
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<PersonRecord>>;
}

/// Directory backed by a map, keyed by email
#[derive(Debug, Default)]
pub struct InMemoryPersonDirectory {
    people: RwLock<HashMap<String, PersonRecord>>,
}

impl InMemoryPersonDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a person
    pub fn insert(&self, person: PersonRecord) {
        if let Ok(mut people) = self.people.write() {
            people.insert(person.email.clone(), person);
        }
    }

    pub fn len(&self) -> usize {
        self.people.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<PersonRecord> for InMemoryPersonDirectory {
    fn from_iter<I: IntoIterator<Item = PersonRecord>>(iter: I) -> Self {
        let directory = Self::new();
        for person in iter {
            directory.insert(person);
        }
        directory
    }
}

#[async_trait]
impl PersonDirectory for InMemoryPersonDirectory {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<PersonRecord>> {
        let people = self
            .people
            .read()
            .map_err(|_| anyhow::anyhow!("person directory lock poisoned"))?;
        Ok(people.get(email).cloned())
    }
}
