use crate::common;
use lexis::db::{init::connect, DatabaseKind};
use tempfile::tempdir;

#[actix_web::test]
async fn test_connect_when_sqlite_url_expect_sqlite_connection() {
    let dir = tempdir().unwrap();
    let actual = connect(&common::sqlite_url(&dir)).await.unwrap();
    assert_eq!(actual.kind, DatabaseKind::Sqlite);
}

#[actix_web::test]
async fn test_connect_when_called_twice_expect_migrations_idempotent() {
    let dir = tempdir().unwrap();
    let url = common::sqlite_url(&dir);
    let first = connect(&url).await.unwrap();
    first.pool.close().await;
    let actual = connect(&url).await;
    assert!(actual.is_ok(), "{:?}", actual.err());
}

#[actix_web::test]
async fn test_connect_when_sqlite_file_missing_and_no_create_mode_expect_error() {
    let dir = tempdir().unwrap();
    let url = format!(
        "sqlite://{}",
        dir.path().join("missing.sqlite3").to_string_lossy()
    );
    let actual = connect(&url).await.unwrap_err();
    let expected = "unable to open database file";
    assert!(
        actual.to_string().contains(expected),
        "\"{actual}\" doesn't contain {expected}"
    );
}

#[actix_web::test]
async fn test_connect_when_unsupported_scheme_expect_error() {
    let actual = connect("mysql://localhost/lexis").await.unwrap_err();
    let expected = "Unsupported database scheme";
    assert!(
        actual.to_string().contains(expected),
        "\"{actual}\" doesn't contain {expected}"
    );
}
