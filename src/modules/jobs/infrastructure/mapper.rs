use super::models::JobDto;
use crate::modules::jobs::domain::entities::{JobId, JobRecord};
use crate::modules::jobs::domain::value_objects::JobTime;
use serde_json::Value as JsonValue;

/// Narrows loose wire records into typed [`JobRecord`]s
///
/// Only the id is mandatory. A status that is not a string is treated as
/// absent. Date fields keep whatever the backend sent so the feed can decide
/// per job; values of an unexpected JSON type are kept as text and will fail
/// to parse there.
#[derive(Debug, Default, Clone, Copy)]
pub struct JobMapper;

impl JobMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_job(&self, dto: JobDto) -> Option<JobRecord> {
        let id = dto.id.as_ref().and_then(Self::id_from)?;

        Some(JobRecord {
            id,
            status: dto.status.and_then(Self::text_from),
            start_time: dto.start_time.and_then(Self::time_from),
            end_time: dto.end_time.and_then(Self::time_from),
            title: dto.title.and_then(Self::text_from),
            property_name: dto.property_name.and_then(Self::text_from),
            address: dto.address.and_then(Self::text_from),
        })
    }

    /// Map a whole list, skipping elements that are not job objects or have
    /// no usable id
    pub fn map_jobs(&self, raw: Vec<JsonValue>) -> Vec<JobRecord> {
        let total = raw.len();
        let jobs: Vec<JobRecord> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let dto = match serde_json::from_value::<JobDto>(value) {
                    Ok(dto) => dto,
                    Err(e) => {
                        log::warn!("Skipping job at index {}: malformed record: {}", index, e);
                        return None;
                    }
                };
                let mapped = self.map_job(dto);
                if mapped.is_none() {
                    log::warn!("Skipping job at index {}: missing or invalid id", index);
                }
                mapped
            })
            .collect();

        if jobs.len() < total {
            log::warn!("Mapped {} of {} jobs", jobs.len(), total);
        }
        jobs
    }

    fn id_from(value: &JsonValue) -> Option<JobId> {
        match value {
            JsonValue::String(s) if !s.trim().is_empty() => Some(JobId::new(s.trim())),
            JsonValue::Number(n) => Some(JobId::new(n.to_string())),
            _ => None,
        }
    }

    fn text_from(value: JsonValue) -> Option<String> {
        match value {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn time_from(value: JsonValue) -> Option<JobTime> {
        match value {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(JobTime::Text(s)),
            JsonValue::Number(n) => match n.as_i64() {
                Some(ms) => Some(JobTime::Millis(ms)),
                None => Some(
                    n.as_f64()
                        .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                        .map(|f| JobTime::Millis(f as i64))
                        .unwrap_or_else(|| JobTime::Text(n.to_string())),
                ),
            },
            other => Some(JobTime::Text(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: JsonValue) -> JobDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_string_and_numeric_ids() {
        let mapper = JobMapper::new();

        let a = mapper.map_job(dto(json!({"id": " job-1 "}))).unwrap();
        let b = mapper.map_job(dto(json!({"id": 42}))).unwrap();

        assert_eq!(a.id.as_str(), "job-1");
        assert_eq!(b.id.as_str(), "42");
    }

    #[test]
    fn skips_records_without_id() {
        let mapper = JobMapper::new();
        let jobs = mapper.map_jobs(vec![
            json!({"status": "scheduled"}),
            json!({"id": ""}),
            json!({"id": true}),
            json!({"id": "keep"}),
        ]);

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id.as_str(), "keep");
    }

    #[test]
    fn skips_non_object_elements() {
        let jobs = JobMapper::new().map_jobs(vec![
            json!({"id": "a"}),
            JsonValue::Null,
            json!("b"),
            json!([{"id": "c"}]),
            json!({"id": "d"}),
        ]);

        let ids: Vec<&str> = jobs.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn duplicate_aliases_skip_only_that_record() {
        let jobs = JobMapper::new().map_jobs(vec![
            json!({"id": "both-ids", "_id": "both-ids"}),
            json!({"id": "both-starts", "start_time": "2025-01-10", "startTime": "2025-01-10"}),
            json!({"_id": "fine", "startTime": "2025-01-10"}),
        ]);

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id.as_str(), "fine");
        assert_eq!(jobs[0].start_time, Some(JobTime::Text("2025-01-10".into())));
    }

    #[test]
    fn non_string_status_is_absent() {
        let job = JobMapper::new()
            .map_job(dto(json!({"id": 1, "status": 3})))
            .unwrap();
        assert_eq!(job.status, None);
    }

    #[test]
    fn keeps_date_values_raw() {
        let job = JobMapper::new()
            .map_job(dto(json!({
                "id": 1,
                "start_time": "2025-01-10T09:00:00Z",
                "end_time": 1736553600000i64,
            })))
            .unwrap();

        assert_eq!(job.start_time, Some(JobTime::Text("2025-01-10T09:00:00Z".into())));
        assert_eq!(job.end_time, Some(JobTime::Millis(1_736_553_600_000)));
    }

    #[test]
    fn unexpected_date_types_become_unparseable_text() {
        let job = JobMapper::new()
            .map_job(dto(json!({"id": 1, "startTime": {"date": "2025-01-10"}, "endTime": null})))
            .unwrap();

        assert!(matches!(job.start_time, Some(JobTime::Text(_))));
        assert!(job.start_time.unwrap().resolve(&chrono_tz::Tz::UTC).is_err());
        assert_eq!(job.end_time, None);
    }

    #[test]
    fn fractional_millis_are_truncated() {
        let job = JobMapper::new()
            .map_job(dto(json!({"id": 1, "start_time": 1736467200000.7})))
            .unwrap();
        assert_eq!(job.start_time, Some(JobTime::Millis(1_736_467_200_000)));
    }
}
