//! HTTP API for uploading documents and reading back their nouns and verbs.

pub mod api;
pub mod app;
pub mod errors;
pub mod tracing;
