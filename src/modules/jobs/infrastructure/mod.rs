pub mod api_source;
pub mod file_source;
pub mod http_client;
pub mod mapper;
pub mod models;

pub use api_source::JobsApiSource;
pub use file_source::FileJobSource;
pub use http_client::{ApiClient, RetryPolicy};
pub use mapper::JobMapper;
pub use models::{JobDto, JobListPayload};
