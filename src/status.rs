use serde::Deserialize;

use crate::ApiError;
use crate::wire::{Timestamp, deserialize_to_i64};

/// Code of a successful response.
pub const SUCCESS_CODE: i64 = 1;

/// The status block carried by every DNSPod response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Status {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Turns a failed status into an [ApiError] carrying the message verbatim.
    pub(crate) fn check(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::new(self.code, &self.message))
        }
    }
}

/// The part of the envelope every endpoint shares.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub(crate) status: Status,
}
