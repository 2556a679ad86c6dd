//! The error entity attached to failed results.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::ErrorType;

/// Insertion-ordered metadata bag shared by errors and outcomes.
pub type Metadata = serde_json::Map<String, Value>;

/// A single diagnostic record: message, optional code, optional
/// classification and open metadata.
///
/// An `Error` never carries a status of its own; it is attached to the error
/// list of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct Error {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_type: Option<ErrorType>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    metadata: Metadata,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            error_type: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(message).code(code)
    }

    pub fn with_type(message: impl Into<String>, error_type: ErrorType) -> Self {
        Self::new(message).error_type(error_type)
    }

    /// Capture the display message of any standard error, concrete or
    /// trait object.
    pub fn from_std_error<E: StdError + ?Sized>(err: &E) -> Self {
        Self::new(err.to_string())
    }

    /// Set the machine-readable code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the classification.
    pub fn error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_or_update_metadata(key, value);
        self
    }

    /// Insert or overwrite a metadata entry. Existing keys keep their position.
    pub fn add_or_update_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn kind(&self) -> Option<ErrorType> {
        self.error_type
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Anything a status-named factory accepts as its error payload.
///
/// Plain messages and standard errors become fresh [`Error`]s tagged with the
/// factory's [`ErrorType`]; pre-built [`Error`]s are used verbatim.
///
/// Standard errors are accepted as `&dyn Error` or
/// `Box<dyn Error + Send + Sync>`. A reference to a concrete error type needs
/// a cast, or can go through [`Error::from_std_error`]:
///
/// ```rust
/// use outcome::{AsOutcome, Error, ErrorType, Outcome};
///
/// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
///
/// let tagged = Outcome::unavailable(&io as &dyn std::error::Error);
/// assert_eq!(tagged.errors()[0].kind(), Some(ErrorType::Unavailable));
///
/// let verbatim = Outcome::unavailable(Error::from_std_error(&io).code("TIMEOUT"));
/// assert_eq!(verbatim.error_messages(), vec!["upstream timed out"]);
/// ```
pub trait IntoErrors {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error>;
}

impl IntoErrors for &str {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        vec![Error::with_type(self, error_type)]
    }
}

impl IntoErrors for String {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        vec![Error::with_type(self, error_type)]
    }
}

impl IntoErrors for &[&str] {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        self.iter().map(|m| Error::with_type(*m, error_type)).collect()
    }
}

impl<const N: usize> IntoErrors for [&str; N] {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        self.as_slice().into_errors(error_type)
    }
}

impl IntoErrors for Vec<&str> {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        self.as_slice().into_errors(error_type)
    }
}

impl IntoErrors for Vec<String> {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        self.into_iter()
            .map(|m| Error::with_type(m, error_type))
            .collect()
    }
}

impl IntoErrors for Error {
    fn into_errors(self, _: ErrorType) -> Vec<Error> {
        vec![self]
    }
}

impl IntoErrors for Vec<Error> {
    fn into_errors(self, _: ErrorType) -> Vec<Error> {
        self
    }
}

impl<const N: usize> IntoErrors for [Error; N] {
    fn into_errors(self, _: ErrorType) -> Vec<Error> {
        self.into()
    }
}

impl IntoErrors for &(dyn StdError + '_) {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        vec![Error::from_std_error(self).error_type(error_type)]
    }
}

impl IntoErrors for &(dyn StdError + Send + Sync + '_) {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        vec![Error::from_std_error(self).error_type(error_type)]
    }
}

impl IntoErrors for Box<dyn StdError + Send + Sync> {
    fn into_errors(self, error_type: ErrorType) -> Vec<Error> {
        self.as_ref().into_errors(error_type)
    }
}
