//! Conversions between [`Result`] and other wrapper types.
//!
//! Wrapping a value into a result never loses information. Converting a
//! result into a wrapper without an error channel (`Option`) drops the
//! errors; that direction is lossy.

use crate::error::{Error, IntoErrors};
use crate::outcome::AsOutcome;
use crate::result::Result;

/// Accumulated-errors form: a value or the full error list.
pub type Validation<T> = std::result::Result<T, Vec<Error>>;

impl<T> Result<T> {
    /// `Some` only for a success carrying a value. Errors are discarded.
    pub fn into_option(self) -> Option<T> {
        if self.is_success() {
            self.into_value()
        } else {
            None
        }
    }

    /// `None` becomes `NotFound` with the supplied errors.
    pub fn from_option(value: Option<T>, errors: impl IntoErrors) -> Self {
        match value {
            Some(value) => Result::success(value),
            None => Result::not_found(errors),
        }
    }

    /// Success keeps its (optional) value; failure yields its error list.
    pub fn into_validation(self) -> Validation<Option<T>> {
        if self.is_success() {
            Ok(self.into_value())
        } else {
            Err(self.into_errors())
        }
    }

    /// `Err` becomes a `ValidationError` result with the errors verbatim.
    pub fn from_validation(validation: Validation<T>) -> Self {
        match validation {
            Ok(value) => Result::success(value),
            Err(errors) => Result::validation_error(errors),
        }
    }
}

#[cfg(feature = "either")]
mod either_impl {
    use either::Either;

    use super::*;

    impl<T> Result<T> {
        /// `Right` carries the success value, `Left` the errors.
        pub fn into_either(self) -> Either<Vec<Error>, Option<T>> {
            match self.into_validation() {
                Ok(value) => Either::Right(value),
                Err(errors) => Either::Left(errors),
            }
        }

        /// `Left` becomes a `Failure`.
        pub fn from_either<L: IntoErrors>(either: Either<L, T>) -> Self {
            match either {
                Either::Right(value) => Result::success(value),
                Either::Left(errors) => Result::failure(errors),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{ErrorType, ResultStatus};

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Result::success(1).into_option(), Some(1));
        assert_eq!(Result::conflict_with(1, "x").into_option(), None);

        let missing: Result<u8> = Result::from_option(None, "no such sku");
        assert_eq!(missing.status(), ResultStatus::NotFound);
        assert_eq!(missing.error_messages(), vec!["no such sku"]);

        assert_eq!(Result::from_option(Some(3), "unused").value(), Some(&3));
    }

    #[test]
    fn test_validation_conversions() {
        assert_eq!(Result::success(2).into_validation(), Ok(Some(2)));

        let errors = Result::<u8>::invalid(["a", "b"]).into_validation().unwrap_err();
        assert_eq!(errors.len(), 2);

        let failed: Result<u8> = Result::from_validation(Err(vec![Error::with_type(
            "name is required",
            ErrorType::Invalid,
        )]));
        assert_eq!(failed.status(), ResultStatus::ValidationError);
        assert_eq!(failed.errors()[0].kind(), Some(ErrorType::Invalid));
    }

    #[cfg(feature = "either")]
    #[test]
    fn test_either_conversions() {
        use either::Either;

        assert_eq!(Result::success(1).into_either(), Either::Right(Some(1)));

        let left = Result::<u8>::unavailable("down").into_either();
        assert!(matches!(left, Either::Left(ref errors) if errors.len() == 1));

        let failed: Result<u8> = Result::from_either(Either::Left("boom"));
        assert_eq!(failed.status(), ResultStatus::Failure);
    }
}
