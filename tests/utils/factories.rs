/// Test data factories using builder pattern
///
/// Provides convenient methods to create job records with sensible defaults
use chrono::NaiveDate;
use spotless_lib::modules::jobs::{JobRecord, JobTime};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub struct JobFactory {
    id: String,
    status: Option<String>,
    start_time: Option<JobTime>,
    end_time: Option<JobTime>,
    title: Option<String>,
}

impl Default for JobFactory {
    fn default() -> Self {
        Self {
            id: format!("job-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            status: Some("scheduled".to_string()),
            start_time: None,
            end_time: None,
            title: None,
        }
    }
}

impl JobFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduled job on a single day
    pub fn on(date: &str) -> Self {
        Self::default().with_start(date)
    }

    /// Scheduled job spanning `start..=end`
    pub fn spanning(start: &str, end: &str) -> Self {
        Self::default().with_start(start).with_end(end)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn without_status(mut self) -> Self {
        self.status = None;
        self
    }

    pub fn with_start(mut self, start: &str) -> Self {
        self.start_time = Some(JobTime::from(start));
        self
    }

    pub fn with_start_millis(mut self, millis: i64) -> Self {
        self.start_time = Some(JobTime::Millis(millis));
        self
    }

    pub fn with_end(mut self, end: &str) -> Self {
        self.end_time = Some(JobTime::from(end));
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn build(self) -> JobRecord {
        let mut job = JobRecord::new(self.id);
        job.status = self.status;
        job.start_time = self.start_time;
        job.end_time = self.end_time;
        job.title = self.title;
        job
    }
}
