use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

pub mod manager;

/// Trait for managing records.
#[async_trait]
pub trait Manager {
    /// Find the record stored under `email`, if any.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Record>>;
    /// Number of records stored under `email`. Never more than one.
    async fn count_by_email(&self, email: &str) -> anyhow::Result<i64>;
}

/// Trait for managing transactions on records.
#[async_trait]
pub trait TxManager {
    /// Insert a record unless one already exists for its email.
    /// Returns `false` when the email was already taken.
    async fn create(&mut self, record: &Record) -> anyhow::Result<bool>;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Nouns and verbs extracted from one uploaded document.
pub struct Record {
    /// Unique key. Case-sensitive.
    pub email: String,
    /// Noun tokens in document order. Stored as a JSON array.
    pub nouns: Vec<String>,
    /// Verb tokens in document order. Stored as a JSON array.
    pub verbs: Vec<String>,
    /// RFC 3339 timestamp of the insert.
    pub created_at: String,
}

impl FromRow<'_, AnyRow> for Record {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        let nouns: String = row.try_get("nouns")?;
        let verbs: String = row.try_get("verbs")?;
        Ok(Self {
            email: row.try_get("email")?,
            nouns: decode_tokens(&nouns)?,
            verbs: decode_tokens(&verbs)?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Parse a JSON array column.
fn decode_tokens(column: &str) -> Result<Vec<String>, sqlx::Error> {
    serde_json::from_str(column).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl Record {
    /// Create a new record stamped with the current time.
    #[must_use]
    pub fn new(email: String, nouns: Vec<String>, verbs: Vec<String>) -> Self {
        Self {
            email,
            nouns,
            verbs,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
