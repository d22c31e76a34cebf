//! This module contains the API endpoints for the server.
pub mod records;
pub mod routes;
pub mod state;
pub mod upload;
