pub mod dto;
pub mod service;

pub use dto::{JobFeed, JobFeedQuery, TodaysJobsQuery, UpcomingJobsQuery};
pub use service::JobFeedService;
