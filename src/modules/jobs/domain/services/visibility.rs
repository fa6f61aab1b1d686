//! Job visibility rules for the home screen
//!
//! Two projections over the job list:
//! - **today**: open jobs whose scheduled window covers the current day,
//!   in-progress work first
//! - **upcoming**: jobs starting strictly after the current day, earliest first
//!
//! Both return borrowed records from the input, so the output is always a
//! subsequence of what was fetched. A job whose dates cannot be parsed is
//! skipped on its own; it never aborts the pass.

use crate::modules::jobs::domain::entities::JobRecord;
use crate::modules::jobs::domain::value_objects::{JobStatusTag, JobTime, ScheduledAt};
use crate::shared::errors::AppResult;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Upper bound on the length of either list
pub const MAX_VISIBLE_JOBS: usize = 3;

/// Applies the today/upcoming rules against a caller-supplied day
#[derive(Debug, Clone, Copy)]
pub struct JobVisibilityFilter {
    timezone: Tz,
}

/// A job that passed inclusion, with its resolved sort key
struct Candidate<'a> {
    job: &'a JobRecord,
    in_progress: bool,
    start: ScheduledAt,
}

impl Default for JobVisibilityFilter {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl JobVisibilityFilter {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Jobs relevant to `today`, at most [`MAX_VISIBLE_JOBS`]
    ///
    /// Completed and overdue jobs are dropped. A job with a valid end time is
    /// shown on every day of its window; otherwise only on its start day.
    /// In-progress jobs lead, then ascending start time; equal keys keep input
    /// order.
    pub fn todays_jobs<'a>(
        &self,
        jobs: &'a [JobRecord],
        today: NaiveDate,
    ) -> Vec<&'a JobRecord> {
        let mut candidates: Vec<Candidate<'a>> = jobs
            .iter()
            .filter_map(|job| self.today_candidate(job, today))
            .collect();

        // `sort_by` is stable
        candidates.sort_by(|a, b| {
            b.in_progress
                .cmp(&a.in_progress)
                .then_with(|| a.start.cmp(&b.start))
        });

        log::debug!(
            "Today filter: {} of {} jobs match {}",
            candidates.len(),
            jobs.len(),
            today
        );

        candidates
            .into_iter()
            .take(MAX_VISIBLE_JOBS)
            .map(|candidate| candidate.job)
            .collect()
    }

    /// Jobs starting on a day strictly after `today`, at most [`MAX_VISIBLE_JOBS`]
    ///
    /// Status plays no part here. Ordered by ascending start time.
    pub fn upcoming_jobs<'a>(
        &self,
        jobs: &'a [JobRecord],
        today: NaiveDate,
    ) -> Vec<&'a JobRecord> {
        let mut candidates: Vec<Candidate<'a>> = jobs
            .iter()
            .filter_map(|job| self.upcoming_candidate(job, today))
            .collect();

        candidates.sort_by(|a, b| a.start.cmp(&b.start));

        log::debug!(
            "Upcoming filter: {} of {} jobs start after {}",
            candidates.len(),
            jobs.len(),
            today
        );

        candidates
            .into_iter()
            .take(MAX_VISIBLE_JOBS)
            .map(|candidate| candidate.job)
            .collect()
    }

    fn today_candidate<'a>(
        &self,
        job: &'a JobRecord,
        today: NaiveDate,
    ) -> Option<Candidate<'a>> {
        let tag = job.status_tag();
        if tag.is_closed() {
            return None;
        }

        let start = match self.resolve(job.start_time.as_ref()?) {
            Ok(start) => start,
            Err(e) => {
                log::debug!("Today filter: skipping job {} ({})", job.id, e);
                return None;
            }
        };
        let start_date = start.day();

        // An unparseable end time counts as no end time
        let end_date = job
            .end_time
            .as_ref()
            .and_then(|end| self.resolve(end).ok())
            .map(|end| end.day());

        let included = match end_date {
            Some(end_date) => start_date <= today && today <= end_date,
            None => start_date == today,
        };

        included.then_some(Candidate {
            job,
            in_progress: tag == JobStatusTag::InProgress,
            start,
        })
    }

    fn upcoming_candidate<'a>(
        &self,
        job: &'a JobRecord,
        today: NaiveDate,
    ) -> Option<Candidate<'a>> {
        let raw = job.start_time.as_ref()?;
        let start = match self.resolve(raw) {
            Ok(start) => start,
            Err(e) => {
                log::warn!(
                    "Upcoming filter: invalid start_time '{}' on job {}: {}",
                    raw,
                    job.id,
                    e
                );
                return None;
            }
        };

        (start.day() > today).then_some(Candidate {
            job,
            in_progress: job.status_tag() == JobStatusTag::InProgress,
            start,
        })
    }

    fn resolve(&self, time: &JobTime) -> AppResult<ScheduledAt> {
        time.resolve(&self.timezone)
    }
}

/// [`JobVisibilityFilter::todays_jobs`] with dates read in UTC
pub fn filter_todays_jobs(jobs: &[JobRecord], today: NaiveDate) -> Vec<&JobRecord> {
    JobVisibilityFilter::default().todays_jobs(jobs, today)
}

/// [`JobVisibilityFilter::upcoming_jobs`] with dates read in UTC
pub fn filter_upcoming_jobs(jobs: &[JobRecord], today: NaiveDate) -> Vec<&JobRecord> {
    JobVisibilityFilter::default().upcoming_jobs(jobs, today)
}
