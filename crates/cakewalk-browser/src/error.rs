use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("No element matched `{selector}` within {timeout_ms}ms")]
    ElementNotFound { selector: String, timeout_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_names_selector_and_deadline() {
        let err = Error::ElementNotFound {
            selector: "//header//p[text()='Learn']".to_string(),
            timeout_ms: 10_000,
        };

        let message = err.to_string();
        assert!(message.contains("//header//p[text()='Learn']"));
        assert!(message.contains("10000ms"));
    }
}
