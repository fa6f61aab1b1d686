pub mod modules;
pub mod shared;

use modules::jobs::{
    infrastructure::{ApiClient, FileJobSource, JobsApiSource},
    JobFeedService, JobSource, JobVisibilityFilter, SystemClock,
};
use shared::{AppConfig, AppResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the feed reads jobs from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOrigin {
    /// Live backend at the configured base URL
    Api,
    /// Saved API response on disk
    File(PathBuf),
}

/// Wire up the job feed service from configuration
///
/// The clock and the filter share the configured timezone so "today" and
/// the day of each job are read the same way.
pub fn build_job_feed_service(
    config: &AppConfig,
    origin: FeedOrigin,
) -> AppResult<JobFeedService> {
    log::info!(
        "Initializing job feed (timezone: {}, origin: {:?})",
        config.timezone,
        origin
    );

    let source: Arc<dyn JobSource> = match origin {
        FeedOrigin::Api => Arc::new(JobsApiSource::new(ApiClient::from_config(config)?)),
        FeedOrigin::File(path) => Arc::new(FileJobSource::new(path)),
    };

    Ok(JobFeedService::new(
        source,
        Arc::new(SystemClock::new(config.timezone)),
        JobVisibilityFilter::new(config.timezone),
    ))
}
