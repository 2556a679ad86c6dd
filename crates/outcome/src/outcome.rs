//! The untyped result record and the accessor trait shared by every result type.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, IntoErrors, Metadata};
use crate::status::{ErrorType, ResultStatus};

/// Default separator used by [`Outcome::combine`].
pub const DEFAULT_JOIN_SEPARATOR: &str = ", ";

/// Outcome of an operation that produces no value.
///
/// Construction is closed: the only way to obtain an `Outcome` is one of the
/// named factories, so the status and the success flag can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    status: ResultStatus,
    is_success: bool,
    success_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    errors: Vec<Error>,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    metadata: Metadata,
}

impl Outcome {
    fn new(status: ResultStatus, errors: Vec<Error>) -> Self {
        Self {
            status,
            is_success: status.is_success(),
            success_message: String::new(),
            correlation_id: None,
            errors,
            metadata: Metadata::new(),
        }
    }

    pub(crate) fn failed(status: ResultStatus, errors: impl IntoErrors) -> Self {
        debug_assert!(!status.is_success());
        let error_type = status.error_type().unwrap_or(ErrorType::Error);
        Self::new(status, errors.into_errors(error_type))
    }

    pub fn success() -> Self {
        Self::new(ResultStatus::Success, Vec::new())
    }

    pub fn success_with_message(message: impl Into<String>) -> Self {
        let mut outcome = Self::success();
        outcome.success_message = message.into();
        outcome
    }

    /// Successful, with nothing to report.
    pub fn no_content() -> Self {
        Self::new(ResultStatus::NoContent, Vec::new())
    }
}

/// Generates one factory per failure status.
///
/// `outcome_factories!` covers the untyped record; `value_factories!` adds the
/// plain and value-carrying pair to a generic result type whose
/// `from_outcome(outcome, value)` constructor builds the final value.
macro_rules! outcome_factories {
    ($($(#[$doc:meta])* $name:ident => $status:ident;)*) => {
        impl Outcome {
            $(
                $(#[$doc])*
                pub fn $name(errors: impl IntoErrors) -> Self {
                    Self::failed(ResultStatus::$status, errors)
                }
            )*
        }
    };
}

macro_rules! value_factories {
    ($ty:ident; $($(#[$doc:meta])* $name:ident, $with:ident => $status:ident;)*) => {
        impl<T> $ty<T> {
            $(
                $(#[$doc])*
                pub fn $name(errors: impl $crate::error::IntoErrors) -> Self {
                    let outcome = $crate::outcome::Outcome::failed(
                        $crate::status::ResultStatus::$status,
                        errors,
                    );
                    Self::from_outcome(outcome, None)
                }

                $(#[$doc])*
                ///
                /// Carries `value` alongside the errors.
                pub fn $with(value: T, errors: impl $crate::error::IntoErrors) -> Self {
                    let outcome = $crate::outcome::Outcome::failed(
                        $crate::status::ResultStatus::$status,
                        errors,
                    );
                    Self::from_outcome(outcome, Some(value))
                }
            )*
        }
    };
}

pub(crate) use value_factories;

outcome_factories! {
    /// Generic business failure.
    failure => Failure;
    /// The caller is authenticated but may not perform the operation.
    forbidden => Forbidden;
    /// The caller is not authenticated.
    unauthorized => Unauthorized;
    /// The input is malformed.
    invalid => Invalid;
    not_found => NotFound;
    conflict => Conflict;
    /// A dependency is temporarily unavailable.
    unavailable => Unavailable;
    /// The operation is not supported.
    unsupported => Unsupported;
    /// Field-level validation failed.
    validation_error => ValidationError;
    /// Unexpected, unrecoverable failure.
    critical_error => CriticalError;
}

/// Read access to the outcome part of any result type.
///
/// This replaces the `Result -> Result<T> -> PagedResult<T>` inheritance
/// chain: every result type exposes its embedded [`Outcome`] and gets the
/// shared accessors for free.
pub trait AsOutcome {
    fn as_outcome(&self) -> &Outcome;

    fn status(&self) -> ResultStatus {
        self.as_outcome().status
    }

    fn is_success(&self) -> bool {
        self.as_outcome().is_success
    }

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    fn errors(&self) -> &[Error] {
        &self.as_outcome().errors
    }

    /// The messages of all errors, in order.
    fn error_messages(&self) -> Vec<String> {
        self.errors().iter().map(|e| e.message().to_string()).collect()
    }

    fn success_message(&self) -> &str {
        &self.as_outcome().success_message
    }

    fn metadata(&self) -> &Metadata {
        &self.as_outcome().metadata
    }

    fn correlation_id(&self) -> Option<&str> {
        self.as_outcome().correlation_id.as_deref()
    }
}

impl AsOutcome for Outcome {
    fn as_outcome(&self) -> &Outcome {
        self
    }
}

impl<R: AsOutcome + ?Sized> AsOutcome for &R {
    fn as_outcome(&self) -> &Outcome {
        (**self).as_outcome()
    }
}

impl Outcome {
    /// Insert or overwrite a metadata entry.
    pub fn add_or_update_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_or_update_metadata(key, value);
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    pub(crate) fn set_correlation_id(&mut self, correlation_id: impl Into<String>) {
        self.correlation_id = Some(correlation_id.into());
    }

    pub(crate) fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Take over `source`'s metadata and correlation id where this outcome
    /// has none of its own.
    pub(crate) fn inherit_context(mut self, source: Outcome) -> Self {
        for (key, value) in source.metadata {
            self.metadata.entry(key).or_insert(value);
        }
        if self.correlation_id.is_none() {
            self.correlation_id = source.correlation_id;
        }
        self
    }

    /// Collect every failing result's error messages into a single
    /// `Failure`, joined with `", "`. Does not short-circuit.
    pub fn combine<I>(results: I) -> Outcome
    where
        I: IntoIterator,
        I::Item: AsOutcome,
    {
        Self::join(results, DEFAULT_JOIN_SEPARATOR)
    }

    /// Like [`Outcome::combine`] with a caller-chosen separator.
    ///
    /// Success only if no input failed. Unlike
    /// [`Result::aggregate`](crate::Result::aggregate), every failure is
    /// visited.
    pub fn join<I>(results: I, separator: &str) -> Outcome
    where
        I: IntoIterator,
        I::Item: AsOutcome,
    {
        let messages: Vec<String> = results
            .into_iter()
            .filter(|r| r.is_failure())
            .flat_map(|r| r.error_messages())
            .collect();

        if messages.is_empty() {
            Outcome::success()
        } else {
            Outcome::failure(messages.join(separator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_factories() {
        let ok = Outcome::success();
        assert!(ok.is_success());
        assert_eq!(ok.status(), ResultStatus::Success);
        assert!(ok.errors().is_empty());

        let with_message = Outcome::success_with_message("saved");
        assert_eq!(with_message.success_message(), "saved");

        let empty = Outcome::no_content();
        assert!(empty.is_success());
        assert_eq!(empty.status(), ResultStatus::NoContent);
    }

    #[test]
    fn test_failure_factories_set_status_and_type() {
        let cases = [
            (Outcome::failure("x"), ResultStatus::Failure, ErrorType::Failure),
            (Outcome::forbidden("x"), ResultStatus::Forbidden, ErrorType::Forbidden),
            (Outcome::unauthorized("x"), ResultStatus::Unauthorized, ErrorType::Unauthorized),
            (Outcome::invalid("x"), ResultStatus::Invalid, ErrorType::Invalid),
            (Outcome::not_found("x"), ResultStatus::NotFound, ErrorType::NotFound),
            (Outcome::conflict("x"), ResultStatus::Conflict, ErrorType::Conflict),
            (Outcome::unavailable("x"), ResultStatus::Unavailable, ErrorType::Unavailable),
            (Outcome::unsupported("x"), ResultStatus::Unsupported, ErrorType::Unsupported),
            (
                Outcome::validation_error("x"),
                ResultStatus::ValidationError,
                ErrorType::ValidationError,
            ),
            (Outcome::critical_error("x"), ResultStatus::CriticalError, ErrorType::Error),
        ];

        for (outcome, status, error_type) in cases {
            assert!(!outcome.is_success());
            assert_eq!(outcome.status(), status);
            assert_eq!(outcome.errors().len(), 1);
            assert_eq!(outcome.errors()[0].kind(), Some(error_type));
        }
    }

    #[test]
    fn test_multiple_messages() {
        let outcome = Outcome::invalid(["name is required", "price must be positive"]);
        assert_eq!(
            outcome.error_messages(),
            vec!["name is required", "price must be positive"]
        );
    }

    #[test]
    fn test_std_error_factory() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
        let outcome = Outcome::unavailable(&io as &dyn std::error::Error);

        assert_eq!(outcome.error_messages(), vec!["upstream timed out"]);
    }

    #[test]
    fn test_combine_collects_every_failure() {
        let combined = Outcome::combine([
            Outcome::failure("a"),
            Outcome::failure("b"),
            Outcome::success(),
        ]);

        assert_eq!(combined.status(), ResultStatus::Failure);
        assert_eq!(combined.error_messages(), vec!["a, b"]);
    }

    #[test]
    fn test_join_with_separator_and_borrowed_inputs() {
        let results = vec![Outcome::not_found(["a", "b"]), Outcome::conflict("c")];
        let joined = Outcome::join(&results, " | ");

        assert_eq!(joined.error_messages(), vec!["a | b | c"]);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_combine_all_success() {
        assert!(Outcome::combine([Outcome::success(), Outcome::no_content()]).is_success());
        assert!(Outcome::combine(Vec::<Outcome>::new()).is_success());
    }

    #[test]
    fn test_metadata_and_correlation() {
        let mut outcome = Outcome::failure("boom").with_correlation_id("req-1");
        outcome.add_or_update_metadata("TraceId", "abc");
        outcome.add_or_update_metadata("TraceId", "def");

        assert_eq!(outcome.correlation_id(), Some("req-1"));
        assert_eq!(outcome.metadata().len(), 1);
        assert_eq!(outcome.metadata()["TraceId"], "def");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Outcome::not_found("missing id")).unwrap();

        assert_eq!(json["status"], "NotFound");
        assert_eq!(json["isSuccess"], false);
        assert_eq!(json["errors"][0]["message"], "missing id");
        assert_eq!(json["errors"][0]["errorType"], "NotFound");
        assert!(json.get("correlationId").is_none());
        assert!(json["metadata"].is_object());
    }
}
