use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_base_url(url: &str) -> Result<(), AppError> {
        if url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Base URL cannot be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::ValidationError(format!(
                "Base URL must start with http:// or https:// (got '{}')",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_max_retries(max_retries: u32) -> Result<(), AppError> {
        if max_retries > 10 {
            return Err(AppError::ValidationError(
                "Max retries cannot exceed 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_timeout_secs(timeout_secs: u64) -> Result<(), AppError> {
        if timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "Timeout must be positive".to_string(),
            ));
        }
        if timeout_secs > 300 {
            return Err(AppError::ValidationError(
                "Timeout cannot exceed 300 seconds".to_string(),
            ));
        }
        Ok(())
    }
}
