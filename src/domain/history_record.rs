use chrono::{DateTime, SecondsFormat, Utc};

use super::{InputType, RecordType};

/// Summary of one completed pipeline run, handed off to the history store.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub user_id: String,
    pub record_type: RecordType,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(user_id: impl Into<String>, input_type: &InputType, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            record_type: input_type.record_type(),
            language: input_type.as_str().to_string(),
            created_at,
        }
    }

    pub fn timestamp(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
