pub mod clock;
pub mod entities;
pub mod services;
pub mod source;
pub mod value_objects;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::{JobId, JobRecord};
pub use services::visibility::{
    filter_todays_jobs, filter_upcoming_jobs, JobVisibilityFilter, MAX_VISIBLE_JOBS,
};
pub use source::JobSource;
pub use value_objects::{JobStatusTag, JobTime, ScheduledAt};
