//! API endpoint for reading back a stored record.
use actix_web::{web, HttpResponse};

use crate::db::models::record::Manager as _;
use crate::server::errors::ApiError;

use super::state::Global;
use super::upload::response::RecordResponse;

/// Return the record stored under the email in the path.
///
/// # Errors
/// Errors with 404 if there is no such record, or 500 if the database fails.
#[tracing::instrument(name = "Fetching record", skip(data))]
pub async fn record<T: Global>(
    email: web::Path<String>,
    data: web::Data<T>,
) -> Result<HttpResponse, ApiError> {
    let found = data
        .db()
        .find_by_email(&email)
        .await
        .map_err(ApiError::storage)?;
    found.map_or(Err(ApiError::NotFound), |record| {
        Ok(HttpResponse::Ok().json(RecordResponse::from(record)))
    })
}
