//! Adapter from [`validator`] failures to `ValidationError` results.
//!
//! Each field-level failure becomes one [`Error`] whose metadata carries the
//! error code, severity, property path and attempted value. Nested structs
//! and lists produce dotted and indexed paths (`address.city`,
//! `lines[2].quantity`). Properties are visited in name order so the output is
//! deterministic.

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::Error;
use crate::outcome::Outcome;
use crate::result::Result;
use crate::status::ErrorType;

pub const ERROR_CODE_KEY: &str = "ErrorCode";
pub const SEVERITY_KEY: &str = "Severity";
pub const PROPERTY_NAME_KEY: &str = "PropertyName";
pub const ATTEMPTED_VALUE_KEY: &str = "AttemptedValue";

/// `validator` has no severity levels; every failure is reported as this.
pub const DEFAULT_SEVERITY: &str = "Error";

/// Flatten validation failures into errors.
pub fn errors_from(errors: &ValidationErrors) -> Vec<Error> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<Error>) {
    let mut properties: Vec<_> = errors.errors().iter().collect();
    properties.sort_by_key(|(name, _)| **name);

    for (name, kind) in properties {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                out.extend(failures.iter().map(|failure| to_error(&path, failure)));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn to_error(property: &str, failure: &ValidationError) -> Error {
    let message = failure
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{property} is invalid"));
    let attempted = failure.params.get("value").cloned().unwrap_or(Value::Null);

    Error::with_type(message, ErrorType::ValidationError)
        .code(failure.code.to_string())
        .with_metadata(ERROR_CODE_KEY, failure.code.to_string())
        .with_metadata(SEVERITY_KEY, DEFAULT_SEVERITY)
        .with_metadata(PROPERTY_NAME_KEY, property)
        .with_metadata(ATTEMPTED_VALUE_KEY, attempted)
}

impl Outcome {
    /// `ValidationError` outcome listing every field failure.
    pub fn invalid_input(errors: &ValidationErrors) -> Self {
        Outcome::validation_error(errors_from(errors))
    }
}

impl<T> Result<T> {
    /// `ValidationError` result listing every field failure.
    pub fn invalid_input(errors: &ValidationErrors) -> Self {
        Result::validation_error(errors_from(errors))
    }
}

impl<T: Validate> Result<T> {
    /// Validate `value`, wrapping it as a success or listing its failures.
    pub fn validated(value: T) -> Self {
        match value.validate() {
            Ok(()) => Result::success(value),
            Err(errors) => Result::invalid_input(&errors),
        }
    }
}
