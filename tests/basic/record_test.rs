use crate::common;
use lexis::db::models::record::{Manager as _, Record, TxManager as _};
use lexis::db::{init::connect, DatabaseTransaction, Tx as _};
use tempfile::tempdir;

fn record(email: &str, nouns: &[&str], verbs: &[&str]) -> Record {
    Record::new(
        email.to_owned(),
        nouns.iter().map(|&noun| noun.to_owned()).collect(),
        verbs.iter().map(|&verb| verb.to_owned()).collect(),
    )
}

#[actix_web::test]
async fn test_create_when_new_email_expect_inserted_and_readable() {
    let dir = tempdir().unwrap();
    let db = connect(&common::sqlite_url(&dir)).await.unwrap();
    let expected = record("a@b.co", &["cat", "cat"], &["runs"]);

    let mut tx = DatabaseTransaction::begin(db.pool.clone()).await.unwrap();
    let inserted = tx.create(&expected).await.unwrap();
    tx.commit().await.unwrap();
    assert!(inserted);

    let actual = db.find_by_email("a@b.co").await.unwrap().unwrap();
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_create_when_email_taken_expect_not_inserted_and_original_kept() {
    let dir = tempdir().unwrap();
    let db = connect(&common::sqlite_url(&dir)).await.unwrap();
    let original = record("a@b.co", &["cat"], &["runs"]);
    let duplicate = record("a@b.co", &["dog"], &["barks"]);

    let mut tx = DatabaseTransaction::begin(db.pool.clone()).await.unwrap();
    assert!(tx.create(&original).await.unwrap());
    tx.commit().await.unwrap();

    let mut tx = DatabaseTransaction::begin(db.pool.clone()).await.unwrap();
    let actual = tx.create(&duplicate).await.unwrap();
    tx.rollback().await.unwrap();
    assert!(!actual);

    let stored = db.find_by_email("a@b.co").await.unwrap().unwrap();
    assert_eq!(stored.nouns, vec!["cat"]);
    assert_eq!(db.count_by_email("a@b.co").await.unwrap(), 1);
}

#[actix_web::test]
async fn test_create_when_rolled_back_expect_nothing_stored() {
    let dir = tempdir().unwrap();
    let db = connect(&common::sqlite_url(&dir)).await.unwrap();

    let mut tx = DatabaseTransaction::begin(db.pool.clone()).await.unwrap();
    assert!(tx.create(&record("a@b.co", &[], &[])).await.unwrap());
    tx.rollback().await.unwrap();

    let actual = db.find_by_email("a@b.co").await.unwrap();
    assert!(actual.is_none());
}

#[actix_web::test]
async fn test_find_by_email_when_empty_token_lists_expect_empty_vectors() {
    let dir = tempdir().unwrap();
    let db = connect(&common::sqlite_url(&dir)).await.unwrap();

    let mut tx = DatabaseTransaction::begin(db.pool.clone()).await.unwrap();
    tx.create(&record("quiet@example.com", &[], &[])).await.unwrap();
    tx.commit().await.unwrap();

    let actual = db.find_by_email("quiet@example.com").await.unwrap().unwrap();
    assert!(actual.nouns.is_empty());
    assert!(actual.verbs.is_empty());
}
