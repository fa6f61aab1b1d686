//! HTTP client for the marketplace backend
//!
//! Thin wrapper over `reqwest` that adds bearer auth, a request timeout and
//! retries on throttling or transient failures.

use super::retry_policy::{is_retryable_status, retry_after, RetryPolicy};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

const USER_AGENT: &str = concat!("spotless/", env!("CARGO_PKG_VERSION"));

pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    retry_policy: RetryPolicy,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            retry_policy: RetryPolicy::default(),
        })
    }

    /// Create a client from application configuration
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = Self::new(
            config.require_api_base_url()?,
            config.api_token.clone(),
            config.http_timeout,
        )?;
        Ok(client.with_retry_policy(RetryPolicy::backend(config.http_max_retries)))
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// GET `path` and decode the JSON body, retrying per the policy
    pub async fn get_json<T>(&self, path: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let timer = TimedOperation::new(&format!("GET {}", url));
        let mut attempt = 0;

        loop {
            LogContext::api_call(&url, "started", None);
            let request = self.authorize(self.client.get(&url));

            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    let status = response.status();
                    let body = response.json::<T>().await?;
                    LogContext::api_call(&url, status.as_str(), Some(timer.elapsed_ms()));
                    timer.finish_with_info(&format!("{} attempt(s)", attempt + 1));
                    return Ok(body);
                }
                Ok(response) => {
                    let status = response.status();
                    if is_retryable_status(status) && attempt < self.retry_policy.max_retries {
                        let delay = self
                            .retry_policy
                            .calculate_delay(attempt, retry_after(response.headers()));
                        log::warn!(
                            "API: {} returned {} (attempt {}/{}). Waiting {:?} before retry.",
                            url,
                            status,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            delay
                        );
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    LogContext::api_call(&url, status.as_str(), Some(timer.elapsed_ms()));
                    return Err(match response.error_for_status() {
                        Err(e) => AppError::from(e),
                        Ok(_) => AppError::ApiError(format!("Unexpected status {}", status)),
                    });
                }
                Err(e) => {
                    let error = AppError::from(e);
                    if error.is_transient() && attempt < self.retry_policy.max_retries {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "API: {} failed (attempt {}/{}): {}. Waiting {:?} before retry.",
                            url,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            error,
                            delay
                        );
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    LogContext::error_with_context(&error, &format!("API: GET {}", url));
                    return Err(error);
                }
            }
        }
    }
}
