//! Outcome taxonomy.
//!
//! Two independent classification axes:
//! - [`ResultStatus`] is the outcome category of a whole result and drives the
//!   external representation (HTTP status, wrapper conversions).
//! - [`ErrorType`] classifies a single [`Error`](crate::Error). It usually
//!   matches the status of the result it is attached to, but callers that
//!   supply pre-built errors may classify them however they like.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome category of a result, ordered by HTTP-mapping intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ResultStatus {
    Success,
    Failure,
    Forbidden,
    Unauthorized,
    Invalid,
    NotFound,
    Conflict,
    Unavailable,
    Unsupported,
    ValidationError,
    CriticalError,
    NoContent,
}

/// Classification of a single error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ErrorType {
    Error,
    Forbidden,
    Unauthorized,
    Invalid,
    NotFound,
    Conflict,
    Unavailable,
    Unsupported,
    Failure,
    ValidationError,
}

/// Raised when a status name or numeric code does not belong to the taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedStatus {
    #[error("unsupported result status: {0}")]
    Name(String),

    #[error("unsupported result status code: {0}")]
    Code(u8),
}

impl ResultStatus {
    /// Every status, in declaration order.
    pub const ALL: [ResultStatus; 12] = [
        ResultStatus::Success,
        ResultStatus::Failure,
        ResultStatus::Forbidden,
        ResultStatus::Unauthorized,
        ResultStatus::Invalid,
        ResultStatus::NotFound,
        ResultStatus::Conflict,
        ResultStatus::Unavailable,
        ResultStatus::Unsupported,
        ResultStatus::ValidationError,
        ResultStatus::CriticalError,
        ResultStatus::NoContent,
    ];

    /// Only `Success` and `NoContent` count as success.
    pub fn is_success(self) -> bool {
        matches!(self, ResultStatus::Success | ResultStatus::NoContent)
    }

    /// The error classification the status-named factories tag plain
    /// messages with. `None` for the success statuses.
    pub fn error_type(self) -> Option<ErrorType> {
        match self {
            ResultStatus::Success | ResultStatus::NoContent => None,
            ResultStatus::Failure => Some(ErrorType::Failure),
            ResultStatus::Forbidden => Some(ErrorType::Forbidden),
            ResultStatus::Unauthorized => Some(ErrorType::Unauthorized),
            ResultStatus::Invalid => Some(ErrorType::Invalid),
            ResultStatus::NotFound => Some(ErrorType::NotFound),
            ResultStatus::Conflict => Some(ErrorType::Conflict),
            ResultStatus::Unavailable => Some(ErrorType::Unavailable),
            ResultStatus::Unsupported => Some(ErrorType::Unsupported),
            ResultStatus::ValidationError => Some(ErrorType::ValidationError),
            ResultStatus::CriticalError => Some(ErrorType::Error),
        }
    }

    /// Stable numeric code (declaration position).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultStatus::Success => "Success",
            ResultStatus::Failure => "Failure",
            ResultStatus::Forbidden => "Forbidden",
            ResultStatus::Unauthorized => "Unauthorized",
            ResultStatus::Invalid => "Invalid",
            ResultStatus::NotFound => "NotFound",
            ResultStatus::Conflict => "Conflict",
            ResultStatus::Unavailable => "Unavailable",
            ResultStatus::Unsupported => "Unsupported",
            ResultStatus::ValidationError => "ValidationError",
            ResultStatus::CriticalError => "CriticalError",
            ResultStatus::NoContent => "NoContent",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultStatus {
    type Err = UnsupportedStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedStatus::Name(s.to_string()))
    }
}

impl TryFrom<u8> for ResultStatus {
    type Error = UnsupportedStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ResultStatus::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(UnsupportedStatus::Code(code))
    }
}

impl ErrorType {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorType::Error => "Error",
            ErrorType::Forbidden => "Forbidden",
            ErrorType::Unauthorized => "Unauthorized",
            ErrorType::Invalid => "Invalid",
            ErrorType::NotFound => "NotFound",
            ErrorType::Conflict => "Conflict",
            ErrorType::Unavailable => "Unavailable",
            ErrorType::Unsupported => "Unsupported",
            ErrorType::Failure => "Failure",
            ErrorType::ValidationError => "ValidationError",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
