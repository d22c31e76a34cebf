use serde::{Deserialize, Serialize};

use crate::db::models::record::Record;

/// Body returned for a stored record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    /// Email the record is stored under.
    pub email: String,
    /// Noun tokens in document order.
    pub nouns: Vec<String>,
    /// Verb tokens in document order.
    pub verbs: Vec<String>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            email: record.email,
            nouns: record.nouns,
            verbs: record.verbs,
        }
    }
}
