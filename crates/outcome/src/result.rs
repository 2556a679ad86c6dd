//! `Result<T>`: an outcome that carries a value.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::outcome::{value_factories, AsOutcome, Outcome};
use crate::paged::PagedResult;
use crate::paging::PagedInfo;
use crate::status::ResultStatus;

/// Outcome of an operation producing a `T`.
///
/// The value is optional: failures usually carry none, and value-less
/// successes such as [`Result::no_content`] exist. The embedded [`Outcome`] is
/// reachable through [`AsOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Result<T> {
    #[serde(flatten)]
    outcome: Outcome,
    value: Option<T>,
}

impl<T> Result<T> {
    pub(crate) fn from_outcome(outcome: Outcome, value: Option<T>) -> Self {
        Self { outcome, value }
    }

    /// Wrap a value as a success.
    pub fn success(value: T) -> Self {
        Self::from_outcome(Outcome::success(), Some(value))
    }

    pub fn success_with_message(value: T, message: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::success_with_message(message), Some(value))
    }

    pub fn no_content() -> Self {
        Self::from_outcome(Outcome::no_content(), None)
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Runtime name of the value type. Not serialized.
    pub fn value_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Take the value, **discarding status and errors**.
    ///
    /// A failed result yields whatever value it happened to carry (usually
    /// `None`); nothing about the failure survives. Prefer the combinators or
    /// [`Result::unwrap_or`] unless the status was already checked.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Split into the outcome and the value.
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.value)
    }

    /// Drop the value, keeping status, errors and metadata.
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// Attach paging information. Only a `Success` keeps it; every other
    /// status produces a result without paging information.
    pub fn into_paged_result(self, paged_info: PagedInfo) -> PagedResult<T> {
        let paged_info = (self.status() == ResultStatus::Success).then_some(paged_info);
        PagedResult::from_result(self, paged_info)
    }

    /// Return the value of a successful result.
    ///
    /// # Panics
    /// Panics if the result is not a success or carries no value. This is an
    /// API-misuse signal, not a business outcome.
    pub fn unwrap(self) -> T {
        self.expect("called `Result::unwrap()` on a result without a value")
    }

    /// Like [`Result::unwrap`] with a custom panic message.
    ///
    /// # Panics
    /// Panics if the result is not a success or carries no value.
    pub fn expect(self, msg: &str) -> T {
        match (self.is_success(), self.value) {
            (true, Some(value)) => value,
            _ => panic!(
                "{msg}: status {}, errors [{}]",
                self.outcome.status(),
                self.outcome.error_messages().join(", ")
            ),
        }
    }

    pub fn add_or_update_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.outcome.add_or_update_metadata(key, value);
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.outcome.add_or_update_metadata(key, value);
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.outcome.set_correlation_id(correlation_id);
        self
    }

    /// Rebuild as a result of another value type with the same outcome and
    /// no value.
    pub(crate) fn cast<U>(self) -> Result<U> {
        Result::from_outcome(self.outcome, None)
    }

    pub(crate) fn into_errors(self) -> Vec<Error> {
        self.outcome.into_errors()
    }
}

impl Outcome {
    /// Status-preserving conversion to a typed result without a value.
    pub fn into_result<T>(self) -> Result<T> {
        Result::from_outcome(self, None)
    }
}

impl<T> AsOutcome for Result<T> {
    fn as_outcome(&self) -> &Outcome {
        &self.outcome
    }
}

value_factories! {
    Result;
    /// Generic business failure.
    failure, failure_with => Failure;
    forbidden, forbidden_with => Forbidden;
    unauthorized, unauthorized_with => Unauthorized;
    invalid, invalid_with => Invalid;
    not_found, not_found_with => NotFound;
    conflict, conflict_with => Conflict;
    unavailable, unavailable_with => Unavailable;
    unsupported, unsupported_with => Unsupported;
    validation_error, validation_error_with => ValidationError;
    critical_error, critical_error_with => CriticalError;
}
