use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to fetch category page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to write catalog file: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid selector: {selector}")]
    Selector { selector: String },
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ScrapeError = io_err.into();
        assert!(matches!(err, ScrapeError::Write(_)));
    }

    #[test]
    fn test_selector_error_message() {
        let err = ScrapeError::Selector {
            selector: "li.ajax_block_product".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid selector: li.ajax_block_product");
    }
}
