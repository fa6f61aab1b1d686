use super::http_client::ApiClient;
use super::mapper::JobMapper;
use super::models::JobListPayload;
use crate::modules::jobs::domain::{entities::JobRecord, source::JobSource};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

const JOBS_PATH: &str = "/jobs";

/// Job source backed by the marketplace API (`GET /jobs`)
pub struct JobsApiSource {
    client: ApiClient,
    mapper: JobMapper,
}

impl JobsApiSource {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            mapper: JobMapper::new(),
        }
    }
}

#[async_trait]
impl JobSource for JobsApiSource {
    async fn fetch_jobs(&self) -> AppResult<Vec<JobRecord>> {
        let payload: JobListPayload = self.client.get_json(JOBS_PATH).await?;
        let jobs = self.mapper.map_jobs(payload.into_jobs());
        log::info!("API: Fetched {} jobs from {}", jobs.len(), self.client.base_url());
        Ok(jobs)
    }
}
