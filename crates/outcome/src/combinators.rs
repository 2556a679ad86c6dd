//! Composition operators over [`Result`].
//!
//! Every combinator consumes its input and returns a new result. Failures
//! short-circuit: callbacks that consume the value are never invoked on a
//! failed result, and the original status, errors and metadata are carried
//! over unchanged. The only operation that visits every failure is
//! [`Outcome::combine`](crate::Outcome::combine).
//!
//! A success that carries no value (for example [`Result::no_content`])
//! passes through the value-consuming combinators untouched.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;
use crate::outcome::{AsOutcome, Outcome};
use crate::result::Result;
use crate::status::ErrorType;

impl<T> Result<T> {
    /// Transform the value of a success. Failures propagate as-is.
    pub fn map<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        let (outcome, value) = self.into_parts();
        match value {
            Some(value) if outcome.is_success() => Result::from_outcome(outcome, Some(f(value))),
            _ => Result::from_outcome(outcome, None),
        }
    }

    /// Chain a fallible step. On success the step's result is returned
    /// entirely; on failure the step is skipped.
    pub fn bind<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        if self.is_failure() {
            return self.cast();
        }
        let (outcome, value) = self.into_parts();
        match value {
            Some(value) => f(value),
            None => Result::from_outcome(outcome, None),
        }
    }

    /// Alias of [`Result::bind`].
    pub fn and_then<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        self.bind(f)
    }

    /// Fold into a single value. Exactly one branch runs.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(Option<T>) -> R,
        on_failure: impl FnOnce(Vec<Error>) -> R,
    ) -> R {
        if self.is_success() {
            on_success(self.into_value())
        } else {
            on_failure(self.into_errors())
        }
    }

    /// Like [`Result::match_with`], handing the failure branch the error
    /// messages only.
    pub fn match_messages<R>(
        self,
        on_success: impl FnOnce(Option<T>) -> R,
        on_failure: impl FnOnce(Vec<String>) -> R,
    ) -> R {
        if self.is_success() {
            on_success(self.into_value())
        } else {
            on_failure(self.error_messages())
        }
    }

    /// Observe the value of a success.
    pub fn tap(self, action: impl FnOnce(&T)) -> Self {
        if self.is_success() {
            if let Some(value) = self.value() {
                action(value);
            }
        }
        self
    }

    /// Run `action` if the result is a success, with or without a value.
    pub fn if_success(self, action: impl FnOnce()) -> Self {
        if self.is_success() {
            action();
        }
        self
    }

    /// Observe the errors of a failure.
    pub fn tap_error(self, action: impl FnOnce(&[Error])) -> Self {
        if self.is_failure() {
            action(self.errors());
        }
        self
    }

    pub fn if_failure(self, action: impl FnOnce()) -> Self {
        if self.is_failure() {
            action();
        }
        self
    }

    /// Turn a success whose value fails `predicate` into a `Failure` carrying
    /// `message`, keeping metadata and correlation id. The predicate is not
    /// evaluated on failures.
    pub fn ensure(self, predicate: impl FnOnce(&T) -> bool, message: impl Into<String>) -> Self {
        let rejected = match (self.is_success(), self.value()) {
            (true, Some(value)) => !predicate(value),
            _ => false,
        };
        if rejected {
            let message: String = message.into();
            let failed = Outcome::failure(message).inherit_context(self.into_outcome());
            Result::from_outcome(failed, None)
        } else {
            self
        }
    }

    /// Collect values left to right, stopping at the first failure.
    ///
    /// The first failing element's status and errors are returned; later
    /// elements are not inspected. Value-less successes contribute nothing.
    pub fn aggregate<I>(results: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = Result<T>>,
    {
        let mut values = Vec::new();
        for result in results {
            if result.is_failure() {
                return result.cast();
            }
            values.extend(result.into_value());
        }
        Result::success(values)
    }

    /// Run a step that may fail with an error or a panic.
    ///
    /// An `Err` or a panic inside `f` becomes a `Failure` with the `fallback`
    /// message. Neither escapes. A failed input propagates without calling `f`.
    pub fn try_catch<U, E, F>(self, f: F, fallback: impl Into<String>) -> Result<U>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
        E: Display,
    {
        self.guarded(f, |_| Error::with_type(fallback, ErrorType::Failure))
    }

    /// Like [`Result::try_catch`], keeping the caught message and tagging it
    /// with `error_type`.
    pub fn try_catch_as<U, E, F>(self, f: F, error_type: ErrorType) -> Result<U>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
        E: Display,
    {
        self.guarded(f, |message| Error::with_type(message, error_type))
    }

    fn guarded<U, E, F>(self, f: F, to_error: impl FnOnce(String) -> Error) -> Result<U>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
        E: Display,
    {
        if self.is_failure() {
            return self.cast();
        }
        let (outcome, value) = self.into_parts();
        let Some(value) = value else {
            return Result::from_outcome(outcome, None);
        };

        let message = match panic::catch_unwind(AssertUnwindSafe(|| f(value))) {
            Ok(Ok(value)) => return Result::from_outcome(outcome, Some(value)),
            Ok(Err(err)) => err.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        tracing::debug!(error = %message, "guarded step failed");
        let failed = Outcome::failure(to_error(message)).inherit_context(outcome);
        Result::from_outcome(failed, None)
    }

    /// Build a result from a closure that may return an error or panic.
    pub fn catching<E, F>(f: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: Display,
    {
        Result::success(()).try_catch_as(|()| f(), ErrorType::Failure)
    }

    /// The value of a success, otherwise `default`.
    pub fn unwrap_or(self, default: T) -> T {
        self.unwrap_or_else(|_| default)
    }

    /// The value of a success, otherwise computed from the errors.
    pub fn unwrap_or_else(self, f: impl FnOnce(Vec<Error>) -> T) -> T {
        if self.is_success() {
            let (outcome, value) = self.into_parts();
            match value {
                Some(value) => value,
                None => f(outcome.into_errors()),
            }
        } else {
            f(self.into_errors())
        }
    }

    /// Replace the value of a success. Failures are returned unchanged.
    pub fn with_value(self, value: T) -> Self {
        if self.is_failure() {
            return self;
        }
        let (outcome, _) = self.into_parts();
        Result::from_outcome(outcome, Some(value))
    }
}

impl<T> Result<Result<T>> {
    /// Collapse a nested result. A failure at either level wins, outer first.
    pub fn flatten(self) -> Result<T> {
        if self.is_failure() {
            return self.cast();
        }
        let (outcome, inner) = self.into_parts();
        match inner {
            Some(inner) => inner,
            None => Result::from_outcome(outcome, None),
        }
    }
}

impl<T> FromIterator<Result<T>> for Result<Vec<T>> {
    /// Same policy as [`Result::aggregate`].
    fn from_iter<I: IntoIterator<Item = Result<T>>>(iter: I) -> Self {
        Result::aggregate(iter)
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
