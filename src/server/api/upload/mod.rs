//! API endpoint for uploading a PDF and storing its nouns and verbs.
use std::time::Duration;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use crate::analysis::{Analysis, Analyzer};
use crate::db::models::record::{Manager as _, Record, TxManager as _};
use crate::db::{DatabaseConnection, DatabaseTransaction, Tx as _};
use crate::server::errors::ApiError;
use crate::utils::md5;

use super::state::Global;
use self::response::RecordResponse;

/// Multipart form parsing and validation.
pub mod request;
/// Response bodies.
pub mod response;

/// Accept an email and a PDF, extract the PDF's nouns and verbs and store them under
/// the email.
///
/// The email must not already have a record. It is checked before the document is
/// analyzed, and again atomically by the insert, so concurrent uploads for one email
/// store exactly one record.
///
/// # Errors
/// Errors with a JSON body when the form is invalid, the email is taken, the document
/// has no extractable text, analysis times out, or the database fails.
#[tracing::instrument(name = "Uploading document", skip(payload, data))]
pub async fn upload<T: Global>(
    payload: Multipart,
    data: web::Data<T>,
) -> Result<HttpResponse, ApiError> {
    let form = request::UploadForm::read(payload, data.upload().max_file_size).await;
    let upload = form.validate().map_err(|errors| {
        tracing::info!(%errors, "Rejected invalid upload");
        ApiError::Validation(errors)
    })?;
    tracing::info!(
        email = %upload.email,
        filename = %upload.filename,
        bytes = upload.document.len(),
        md5 = %md5::compute(&upload.document),
        "Received document"
    );

    let db = data.db();
    let existing = db
        .find_by_email(&upload.email)
        .await
        .map_err(ApiError::storage)?;
    if existing.is_some() {
        tracing::info!(email = %upload.email, "Email already exists");
        return Err(ApiError::DuplicateEmail);
    }

    let analysis = analyze(
        data.analyzer().clone(),
        upload.document,
        data.analysis_timeout(),
    )
    .await?;
    let record = Record::new(upload.email, analysis.nouns, analysis.verbs);
    persist(db, &record).await?;
    tracing::info!(
        email = %record.email,
        nouns = record.nouns.len(),
        verbs = record.verbs.len(),
        "Stored record"
    );
    Ok(HttpResponse::Created().json(RecordResponse::from(record)))
}

/// Run extraction and tagging on the blocking thread pool, bounded by `limit`.
/// The document is dropped once analysis finishes.
async fn analyze(
    analyzer: Analyzer,
    document: Vec<u8>,
    limit: Duration,
) -> Result<Analysis, ApiError> {
    let task = web::block(move || analyzer.analyze(&document));
    match tokio::time::timeout(limit, task).await {
        Err(_elapsed) => {
            tracing::warn!(timeout_secs = limit.as_secs(), "Analysis timed out");
            Err(ApiError::AnalysisTimedOut(limit.as_secs()))
        }
        Ok(Err(err)) => {
            tracing::error!("Analysis task failed: {err}");
            Err(ApiError::AnalysisAborted)
        }
        Ok(Ok(Err(err))) => {
            tracing::info!("Unable to analyze document: {err}");
            Err(ApiError::Extraction(err))
        }
        Ok(Ok(Ok(analysis))) => Ok(analysis),
    }
}

/// Insert `record` in its own transaction.
async fn persist(db: &DatabaseConnection, record: &Record) -> Result<(), ApiError> {
    let mut tx = DatabaseTransaction::begin(db.pool.clone())
        .await
        .map_err(ApiError::storage)?;
    match tx.create(record).await {
        Ok(true) => tx.commit().await.map_err(ApiError::storage),
        Ok(false) => {
            tracing::info!(email = %record.email, "Email claimed by a concurrent upload");
            tx.rollback().await.map_err(ApiError::storage)?;
            Err(ApiError::DuplicateEmail)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Unable to roll back record insert: {rollback_err:?}");
            }
            Err(narrow_insert_error(err))
        }
    }
}

/// A unique violation on insert means another upload won the race for the email.
fn narrow_insert_error(err: anyhow::Error) -> ApiError {
    let is_unique_violation = err
        .downcast_ref::<sqlx::Error>()
        .and_then(sqlx::Error::as_database_error)
        .is_some_and(|db_err| db_err.is_unique_violation());
    if is_unique_violation {
        ApiError::DuplicateEmail
    } else {
        ApiError::storage(err)
    }
}
