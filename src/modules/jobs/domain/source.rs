/// Source trait for job records
///
/// The feed never cares where jobs come from: the backend API, a file
/// snapshot, or an in-memory fixture all sit behind this seam.
use crate::modules::jobs::domain::entities::JobRecord;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch every job visible to the signed-in user
    async fn fetch_jobs(&self) -> AppResult<Vec<JobRecord>>;
}
