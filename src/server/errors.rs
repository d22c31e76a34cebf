//! Errors returned by the HTTP API.
//!
//! Every variant renders as a JSON body with a fixed status code, so handlers can
//! propagate them with `?`.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

use crate::extraction::ExtractionError;
use crate::server::api::upload::request::FieldErrors;

/// API error with a client-facing JSON body.
#[derive(Debug, Display)]
pub enum ApiError {
    /// One or more form fields are missing or malformed.
    #[display(fmt = "Invalid upload: {}", _0)]
    Validation(FieldErrors),
    /// A record already exists for the submitted email.
    #[display(fmt = "Email already exists")]
    DuplicateEmail,
    /// The uploaded document could not be turned into text.
    #[display(fmt = "{}", _0)]
    Extraction(ExtractionError),
    /// Extraction and tagging ran past the configured limit.
    #[display(fmt = "Analysis did not finish within {} seconds", _0)]
    AnalysisTimedOut(u64),
    /// The blocking analysis task was cancelled or panicked.
    #[display(fmt = "Analysis failed unexpectedly")]
    AnalysisAborted,
    /// No record for the requested email.
    #[display(fmt = "Not found")]
    NotFound,
    /// The database could not be read or written.
    #[display(fmt = "Storage error: {}", _0)]
    Persistence(anyhow::Error),
}

impl ApiError {
    /// Wrap and log a database failure.
    #[must_use]
    pub fn storage(err: anyhow::Error) -> Self {
        tracing::error!("Database error: {err:?}");
        Self::Persistence(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::Validation(_) | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AnalysisTimedOut(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AnalysisAborted | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match *self {
            Self::Validation(ref errors) => response.json(errors),
            Self::DuplicateEmail | Self::NotFound => {
                response.json(json!({ "message": self.to_string() }))
            }
            Self::Extraction(_)
            | Self::AnalysisTimedOut(_)
            | Self::AnalysisAborted
            | Self::Persistence(_) => response.json(json!({ "error": self.to_string() })),
        }
    }
}
