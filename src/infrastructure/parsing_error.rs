//! Error types for page fetching and listing extraction
//!
//! Candidate-level variants describe why one product fragment was dropped;
//! transport-level variants describe why the category page could not be read
//! and trigger the fallback dataset.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("No title found in candidate {index}")]
    TitleMissing { index: usize },

    #[error("Title too short in candidate {index}: '{title}'")]
    TitleTooShort { index: usize, title: String },

    #[error("Candidate {index} is not a smartphone: '{title}'")]
    NotASmartphone { index: usize, title: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("URL resolution failed: {url} - {reason}")]
    UrlResolutionFailed {
        url: String,
        reason: String,
        base_url: Option<String>,
    },

    #[error("HTTP request failed: {status} - {url}")]
    HttpRequestFailed { status: u16, url: String },

    #[error("Transport failure for {url}: {message}")]
    TransportFailed { url: String, message: String },
}

impl ParsingError {
    /// Create a URL resolution error
    pub fn url_resolution_failed(url: &str, reason: &str, base_url: Option<&str>) -> Self {
        Self::UrlResolutionFailed {
            url: url.to_string(),
            reason: reason.to_string(),
            base_url: base_url.map(ToString::to_string),
        }
    }

    /// Create a transport failure from any displayable cause
    pub fn transport_failed(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::TransportFailed {
            url: url.to_string(),
            message: cause.to_string(),
        }
    }

    /// True when the candidate was filtered out rather than broken
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::TitleMissing { .. } | Self::TitleTooShort { .. } | Self::NotASmartphone { .. }
        )
    }

    /// True when the page itself could not be obtained
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::HttpRequestFailed { .. } | Self::TransportFailed { .. })
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_disjoint() {
        let rejection = ParsingError::NotASmartphone {
            index: 2,
            title: "Casque audio".to_string(),
        };
        assert!(rejection.is_rejection());
        assert!(!rejection.is_transport());

        let transport = ParsingError::HttpRequestFailed {
            status: 503,
            url: "https://www.fnac.com".to_string(),
        };
        assert!(transport.is_transport());
        assert!(!transport.is_rejection());

        let broken = ParsingError::url_resolution_failed("http://[::1", "invalid IPv6", None);
        assert!(!broken.is_rejection());
        assert!(!broken.is_transport());
    }

    #[test]
    fn messages_name_the_candidate() {
        let err = ParsingError::TitleTooShort {
            index: 4,
            title: "A1".to_string(),
        };
        assert_eq!(err.to_string(), "Title too short in candidate 4: 'A1'");
    }
}
