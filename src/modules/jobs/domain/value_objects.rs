/// Value objects for jobs domain
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Status tags the feed treats specially
///
/// The backend status set is open-ended; anything not listed here (including
/// a missing status) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatusTag {
    Completed,
    Overdue,
    InProgress,
    Other,
}

impl JobStatusTag {
    pub fn classify(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return JobStatusTag::Other;
        };
        match status.trim().to_lowercase().as_str() {
            "completed" => JobStatusTag::Completed,
            "overdue" => JobStatusTag::Overdue,
            "in-progress" => JobStatusTag::InProgress,
            _ => JobStatusTag::Other,
        }
    }

    /// Finished or lapsed jobs never show up in today's list
    pub fn is_closed(self) -> bool {
        matches!(self, JobStatusTag::Completed | JobStatusTag::Overdue)
    }
}

/// Raw date-like value from the backend: text or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobTime {
    Millis(i64),
    Text(String),
}

// Naive layouts tried after RFC 3339; `%.f` also matches an absent fraction.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

impl JobTime {
    /// Parse into an instant read in `tz`
    ///
    /// Offset-carrying values and epoch milliseconds are converted into `tz`;
    /// naive values are taken as already local. A bare date means local
    /// midnight.
    pub fn resolve(&self, tz: &Tz) -> AppResult<ScheduledAt> {
        match self {
            JobTime::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .map(|utc| ScheduledAt::from_instant(utc, tz))
                .ok_or_else(|| {
                    AppError::InvalidInput(format!("Timestamp out of range: {}", ms))
                }),
            JobTime::Text(raw) => Self::resolve_text(raw.trim(), tz),
        }
    }

    fn resolve_text(raw: &str, tz: &Tz) -> AppResult<ScheduledAt> {
        if raw.is_empty() {
            return Err(AppError::InvalidInput("Empty date".to_string()));
        }

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ScheduledAt::from_instant(with_offset, tz));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(ScheduledAt::from_local(naive, tz));
            }
        }

        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)?;
        Ok(ScheduledAt::from_local(date.and_time(NaiveTime::MIN), tz))
    }
}

impl From<&str> for JobTime {
    fn from(value: &str) -> Self {
        JobTime::Text(value.to_string())
    }
}

impl From<String> for JobTime {
    fn from(value: String) -> Self {
        JobTime::Text(value)
    }
}

impl From<i64> for JobTime {
    fn from(value: i64) -> Self {
        JobTime::Millis(value)
    }
}

impl std::fmt::Display for JobTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobTime::Millis(ms) => write!(f, "{}ms", ms),
            JobTime::Text(raw) => write!(f, "{}", raw),
        }
    }
}

/// A resolved point in time, remembered with its local wall-clock reading
///
/// Ordering compares the absolute instant, so offsets and DST transitions
/// sort correctly; [`ScheduledAt::day`] uses the local reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledAt {
    instant: DateTime<Utc>,
    local: NaiveDateTime,
}

impl ScheduledAt {
    fn from_instant<T: TimeZone>(at: DateTime<T>, tz: &Tz) -> Self {
        let zoned = at.with_timezone(tz);
        Self {
            instant: zoned.with_timezone(&Utc),
            local: zoned.naive_local(),
        }
    }

    /// An ambiguous wall time takes its earlier reading. A wall time skipped
    /// by a forward jump is read with the offset in force before the jump.
    fn from_local(local: NaiveDateTime, tz: &Tz) -> Self {
        let instant = match tz.from_local_datetime(&local).earliest() {
            Some(zoned) => zoned.with_timezone(&Utc),
            None => {
                let before = tz.offset_from_utc_datetime(&(local - Duration::days(1)));
                let offset = i64::from(before.fix().local_minus_utc());
                Utc.from_utc_datetime(&(local - Duration::seconds(offset)))
            }
        };
        Self { instant, local }
    }

    /// The calendar day this instant falls on (time truncated to midnight)
    pub fn day(&self) -> NaiveDate {
        self.local.date()
    }
}
