use crate::shared::errors::AppResult;
/// Base trait for read-only queries
///
/// A query handler owns its collaborators and answers one question.
///
/// # Example
///
/// ```rust,ignore
/// struct TodaysJobsQuery;
///
/// #[async_trait]
/// impl Query<TodaysJobsQuery, Vec<JobRecord>> for JobFeedService {
///     async fn execute(&self, _query: TodaysJobsQuery) -> AppResult<Vec<JobRecord>> {
///         self.todays_jobs().await
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
