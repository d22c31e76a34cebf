//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for record table.
pub mod record;
