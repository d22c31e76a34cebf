use crate::db::{DatabaseConnection, DatabaseKind, Db as _};
/// Connects to a database and applies migrations.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let connection = DatabaseConnection::connect(db_url).await?;
    tracing::info!(kind = ?connection.kind, "Connected to database");
    match connection.kind {
        DatabaseKind::Sqlite => {
            sqlx::migrate!("./migrations/sqlite")
                .run(&connection.pool)
                .await?;
        }
        DatabaseKind::Postgres => {
            sqlx::migrate!("./migrations/postgres")
                .run(&connection.pool)
                .await?;
        }
    }
    Ok(connection)
}
