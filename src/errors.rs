use thiserror::Error;

/// A precondition that failed locally, before any request was sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("domain name is empty")]
    EmptyDomainName,
    #[error("MX records need an MX priority")]
    MissingMxPriority,
    #[error("MX priority {0} is outside of 1-20")]
    MxPriorityOutOfRange(u8),
}

/// A logical failure reported by the DNSPod API.
///
/// Displays as the message the API returned, untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    code: i64,
    message: String,
}

impl ApiError {
    pub(crate) fn new(code: i64, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }

    /// The status code of the response envelope.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The message of the response envelope.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// A timestamp literal that couldn't be turned into a local date and time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimestampError {
    #[error("{0:?}: timestamp doesn't match YYYY-MM-DD HH:MM:SS")]
    Malformed(String),
}
