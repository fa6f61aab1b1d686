use super::mapper::JobMapper;
use super::models::JobListPayload;
use crate::modules::jobs::domain::{entities::JobRecord, source::JobSource};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// Job source reading a saved API response from disk
///
/// Accepts the same payload shapes as the live endpoint.
pub struct FileJobSource {
    path: PathBuf,
    mapper: JobMapper,
}

impl FileJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mapper: JobMapper::new(),
        }
    }
}

#[async_trait]
impl JobSource for FileJobSource {
    async fn fetch_jobs(&self) -> AppResult<Vec<JobRecord>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let payload: JobListPayload = serde_json::from_str(&raw)?;
        let jobs = self.mapper.map_jobs(payload.into_jobs());
        log::info!("Loaded {} jobs from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }
}
