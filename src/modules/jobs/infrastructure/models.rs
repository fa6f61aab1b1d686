/// Wire models for the backend job list
///
/// The backend is loose about types, so every field is read as raw JSON and
/// narrowed in [`super::mapper::JobMapper`].
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// A job as it appears on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDto {
    #[serde(default, alias = "_id")]
    pub id: Option<JsonValue>,
    #[serde(default)]
    pub status: Option<JsonValue>,
    #[serde(default, alias = "startTime")]
    pub start_time: Option<JsonValue>,
    #[serde(default, alias = "endTime")]
    pub end_time: Option<JsonValue>,
    #[serde(default)]
    pub title: Option<JsonValue>,
    #[serde(default, alias = "propertyName")]
    pub property_name: Option<JsonValue>,
    #[serde(default)]
    pub address: Option<JsonValue>,
}

/// Job list payload: a bare array or an envelope
///
/// Elements stay raw so one malformed record cannot fail the whole list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JobListPayload {
    Bare(Vec<JsonValue>),
    Data { data: Vec<JsonValue> },
    Jobs { jobs: Vec<JsonValue> },
}

impl JobListPayload {
    pub fn into_jobs(self) -> Vec<JsonValue> {
        match self {
            JobListPayload::Bare(jobs) => jobs,
            JobListPayload::Data { data } => data,
            JobListPayload::Jobs { jobs } => jobs,
        }
    }
}
