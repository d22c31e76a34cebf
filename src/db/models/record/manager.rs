//! Manager for the record model.
use crate::db::{DatabaseConnection, DatabaseKind, DatabaseTransaction};
use async_trait::async_trait;

use super::Record;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find a record by email.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Record>> {
        let statement = "
            SELECT email, nouns, verbs, created_at
            FROM record
            WHERE email = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite | DatabaseKind::Postgres => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Record>(statement)
                    .bind(email)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Count records by email.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn count_by_email(&self, email: &str) -> anyhow::Result<i64> {
        let statement = "
            SELECT COUNT(*)
            FROM record
            WHERE email = $1
        ";
        let mut connection = self.pool.acquire().await?;
        let (count,): (i64,) = sqlx::query_as(statement)
            .bind(email)
            .fetch_one(&mut *connection)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl super::TxManager for DatabaseTransaction {
    /// Insert a record, leaving an existing record with the same email untouched.
    ///
    /// # Errors
    /// Errors if the record cannot be inserted into the database.
    async fn create(&mut self, record: &Record) -> anyhow::Result<bool> {
        let statement = "
            INSERT INTO record ( email, nouns, verbs, created_at )
            VALUES ( $1, $2, $3, $4 )
            ON CONFLICT ( email ) DO NOTHING
        ";
        let inserted = sqlx::query(statement)
            .bind(record.email.as_str())
            .bind(serde_json::to_string(&record.nouns)?)
            .bind(serde_json::to_string(&record.verbs)?)
            .bind(record.created_at.as_str())
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        Ok(inserted == 1)
    }
}
