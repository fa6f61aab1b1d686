use crate::modules::jobs::domain::entities::JobRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Home screen job lists, computed against a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFeed {
    /// Day both lists were evaluated against
    pub as_of: NaiveDate,
    /// Jobs whose window covers `as_of`
    pub today: Vec<JobRecord>,
    /// Jobs starting after `as_of`
    pub upcoming: Vec<JobRecord>,
}

impl JobFeed {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.upcoming.is_empty()
    }
}

/// Query: today's jobs
#[derive(Debug, Clone, Copy, Default)]
pub struct TodaysJobsQuery;

/// Query: upcoming jobs
#[derive(Debug, Clone, Copy, Default)]
pub struct UpcomingJobsQuery;

/// Query: both lists in one pass
#[derive(Debug, Clone, Copy, Default)]
pub struct JobFeedQuery;
