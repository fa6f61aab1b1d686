/// Domain entities for the job feed
///
/// A job is a cleaning assignment scheduled at a host's property. Records are
/// owned by the backend; this crate only reads them.
use super::value_objects::{JobStatusTag, JobTime};
use serde::{Deserialize, Serialize};

/// Opaque job identifier as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Job record as delivered by the backend
///
/// Date fields stay unparsed so a single malformed value only affects the
/// job it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub status: Option<String>,
    pub start_time: Option<JobTime>,
    pub end_time: Option<JobTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl JobRecord {
    /// Create a bare record with only an id
    pub fn new(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            status: None,
            start_time: None,
            end_time: None,
            title: None,
            property_name: None,
            address: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<JobTime>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn with_end_time(mut self, end_time: impl Into<JobTime>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Classify the status tag (case-insensitive)
    pub fn status_tag(&self) -> JobStatusTag {
        JobStatusTag::classify(self.status.as_deref())
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
