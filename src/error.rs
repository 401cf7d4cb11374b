use std::time::Duration;
use thiserror::Error;

/// Why a seed entry was dropped from the output.
///
/// Every variant is a soft failure: it is logged and the run moves on to the next entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("non-success status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("no valid match")]
    NoMatch,

    #[error("empty detail payload")]
    EmptyDetail,

    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for SkipReason {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SkipReason::Decode(err.to_string())
        } else {
            SkipReason::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for SkipReason {
    fn from(err: url::ParseError) -> Self {
        SkipReason::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Status(404).to_string(), "non-success status 404");
        assert_eq!(SkipReason::NoMatch.to_string(), "no valid match");
        assert_eq!(
            SkipReason::Timeout(Duration::from_secs(10)).to_string(),
            "request timed out after 10s"
        );
    }

    #[test]
    fn test_url_error_maps_to_invalid_url() {
        let err = url::Url::parse("not a url").unwrap_err();
        assert!(matches!(SkipReason::from(err), SkipReason::InvalidUrl(_)));
    }
}
