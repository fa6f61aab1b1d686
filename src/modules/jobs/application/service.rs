use super::dto::{JobFeed, JobFeedQuery, TodaysJobsQuery, UpcomingJobsQuery};
use crate::modules::jobs::domain::{
    clock::Clock, entities::JobRecord, services::visibility::JobVisibilityFilter,
    source::JobSource,
};
use crate::shared::application::Query;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use std::sync::Arc;

/// Builds the home screen job lists
///
/// Each call fetches once and reads the clock once, so a call that straddles
/// midnight still evaluates every job against the same day.
pub struct JobFeedService {
    source: Arc<dyn JobSource>,
    clock: Arc<dyn Clock>,
    filter: JobVisibilityFilter,
}

impl JobFeedService {
    pub fn new(
        source: Arc<dyn JobSource>,
        clock: Arc<dyn Clock>,
        filter: JobVisibilityFilter,
    ) -> Self {
        Self {
            source,
            clock,
            filter,
        }
    }

    pub async fn todays_jobs(&self) -> AppResult<Vec<JobRecord>> {
        let jobs = self.source.fetch_jobs().await?;
        let today = self.clock.today();

        Ok(self
            .filter
            .todays_jobs(&jobs, today)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn upcoming_jobs(&self) -> AppResult<Vec<JobRecord>> {
        let jobs = self.source.fetch_jobs().await?;
        let today = self.clock.today();

        Ok(self
            .filter
            .upcoming_jobs(&jobs, today)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn job_feed(&self) -> AppResult<JobFeed> {
        let jobs = self.source.fetch_jobs().await?;
        let as_of = self.clock.today();

        let today: Vec<JobRecord> = self
            .filter
            .todays_jobs(&jobs, as_of)
            .into_iter()
            .cloned()
            .collect();
        let upcoming: Vec<JobRecord> = self
            .filter
            .upcoming_jobs(&jobs, as_of)
            .into_iter()
            .cloned()
            .collect();

        LogContext::feed_summary(as_of, jobs.len(), today.len(), upcoming.len());

        Ok(JobFeed {
            as_of,
            today,
            upcoming,
        })
    }
}

#[async_trait]
impl Query<TodaysJobsQuery, Vec<JobRecord>> for JobFeedService {
    async fn execute(&self, _query: TodaysJobsQuery) -> AppResult<Vec<JobRecord>> {
        self.todays_jobs().await
    }
}

#[async_trait]
impl Query<UpcomingJobsQuery, Vec<JobRecord>> for JobFeedService {
    async fn execute(&self, _query: UpcomingJobsQuery) -> AppResult<Vec<JobRecord>> {
        self.upcoming_jobs().await
    }
}

#[async_trait]
impl Query<JobFeedQuery, JobFeed> for JobFeedService {
    async fn execute(&self, _query: JobFeedQuery) -> AppResult<JobFeed> {
        self.job_feed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::clock::FixedClock;
    use crate::modules::jobs::domain::source::MockJobSource;
    use crate::shared::errors::AppError;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn sample_jobs() -> Vec<JobRecord> {
        vec![
            JobRecord::new("past")
                .with_status("scheduled")
                .with_start_time("2025-01-11"),
            JobRecord::new("today")
                .with_status("scheduled")
                .with_start_time("2025-01-12T10:00:00"),
            JobRecord::new("running")
                .with_status("In-Progress")
                .with_start_time("2025-01-10")
                .with_end_time("2025-01-14"),
            JobRecord::new("done")
                .with_status("completed")
                .with_start_time("2025-01-12"),
            JobRecord::new("broken")
                .with_status("scheduled")
                .with_start_time("not-a-date"),
            JobRecord::new("next-week")
                .with_status("scheduled")
                .with_start_time("2025-01-20"),
            JobRecord::new("tomorrow")
                .with_status("scheduled")
                .with_start_time("2025-01-13"),
        ]
    }

    fn service_with(source: MockJobSource, today: &str) -> JobFeedService {
        JobFeedService::new(
            Arc::new(source),
            Arc::new(FixedClock(day(today))),
            JobVisibilityFilter::default(),
        )
    }

    fn ids(jobs: &[JobRecord]) -> Vec<&str> {
        jobs.iter().map(|job| job.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_job_feed_uses_one_fetch_for_both_lists() {
        let mut source = MockJobSource::new();
        source
            .expect_fetch_jobs()
            .times(1)
            .returning(|| Ok(sample_jobs()));

        let feed = service_with(source, "2025-01-12").job_feed().await.unwrap();

        assert_eq!(feed.as_of, day("2025-01-12"));
        assert_eq!(ids(&feed.today), vec!["running", "today"]);
        assert_eq!(ids(&feed.upcoming), vec!["tomorrow", "next-week"]);
        assert!(!feed.is_empty());
    }

    #[tokio::test]
    async fn test_individual_queries() {
        let mut source = MockJobSource::new();
        source
            .expect_fetch_jobs()
            .times(2)
            .returning(|| Ok(sample_jobs()));
        let service = service_with(source, "2025-01-12");

        let today = Query::<TodaysJobsQuery, Vec<JobRecord>>::execute(&service, TodaysJobsQuery)
            .await
            .unwrap();
        let upcoming =
            Query::<UpcomingJobsQuery, Vec<JobRecord>>::execute(&service, UpcomingJobsQuery)
                .await
                .unwrap();

        assert_eq!(ids(&today), vec!["running", "today"]);
        assert_eq!(ids(&upcoming), vec!["tomorrow", "next-week"]);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let mut source = MockJobSource::new();
        source
            .expect_fetch_jobs()
            .returning(|| Err(AppError::Unauthorized("token expired".to_string())));

        let result = service_with(source, "2025-01-12").job_feed().await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_empty_source_gives_empty_feed() {
        let mut source = MockJobSource::new();
        source.expect_fetch_jobs().returning(|| Ok(Vec::new()));

        let feed = service_with(source, "2025-01-12").job_feed().await.unwrap();
        assert!(feed.is_empty());
    }

    struct CountingClock {
        reads: AtomicUsize,
        day: NaiveDate,
    }

    impl Clock for CountingClock {
        fn today(&self) -> NaiveDate {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.day
        }
    }

    #[tokio::test]
    async fn test_clock_read_once_per_feed() {
        let mut source = MockJobSource::new();
        source.expect_fetch_jobs().returning(|| Ok(sample_jobs()));
        let clock = Arc::new(CountingClock {
            reads: AtomicUsize::new(0),
            day: day("2025-01-12"),
        });

        let service = JobFeedService::new(
            Arc::new(source),
            clock.clone(),
            JobVisibilityFilter::default(),
        );
        service.job_feed().await.unwrap();

        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
    }
}
