/// Job feed module
///
/// Turns the backend's job list into the two home screen lists:
/// today's jobs and upcoming jobs.
///
/// Architecture:
/// - Domain: job record, date normalization, visibility rules, source and clock seams
/// - Infrastructure: wire models, mapper, HTTP and file sources
/// - Application: feed service consumed by the UI layer
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{JobFeed, JobFeedService};
pub use domain::{
    filter_todays_jobs, filter_upcoming_jobs, Clock, FixedClock, JobId, JobRecord, JobSource,
    JobStatusTag, JobTime, JobVisibilityFilter, ScheduledAt, SystemClock, MAX_VISIBLE_JOBS,
};
pub use infrastructure::{ApiClient, FileJobSource, JobsApiSource};
