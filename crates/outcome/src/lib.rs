//! Status-tagged results for operations that can fail in several
//! well-known ways.
//!
//! This crate provides:
//! - [`Outcome`], [`Result<T>`] and [`PagedResult<T>`], built only through
//!   status-named factories
//! - a combinator algebra (`map`, `bind`, `ensure`, `aggregate`, ...) for
//!   chaining fallible steps without unwrapping early
//! - conversions to `Option`, [`Validation`] and, with the `either` feature,
//!   `either::Either`
//! - with the `axum` feature: HTTP status mapping, `IntoResponse` for every
//!   result type and a panic-catching layer
//! - with the `validator` feature: conversion of `validator` failures into
//!   `ValidationError` results
//!
//! # Example
//!
//! ```rust
//! use outcome::{AsOutcome, Result, ResultStatus};
//!
//! fn parse_quantity(raw: &str) -> Result<u32> {
//!     Result::catching(|| raw.parse::<u32>())
//!         .ensure(|q| *q > 0, "quantity must be positive")
//! }
//!
//! let total = parse_quantity("3").map(|q| q * 250);
//! assert_eq!(total.value(), Some(&750));
//!
//! let rejected = parse_quantity("0");
//! assert_eq!(rejected.status(), ResultStatus::Failure);
//! assert_eq!(rejected.error_messages(), vec!["quantity must be positive"]);
//! ```

mod combinators;
mod convert;
mod error;
mod outcome;
mod paged;
pub mod paging;
mod result;
mod status;

#[cfg(feature = "axum")]
pub mod config;
#[cfg(feature = "axum")]
pub mod http;
#[cfg(feature = "axum")]
pub mod middleware;
#[cfg(feature = "validator")]
pub mod validation;

pub use combinators::panic_message;
pub use convert::Validation;
pub use error::{Error, IntoErrors, Metadata};
pub use outcome::{AsOutcome, Outcome, DEFAULT_JOIN_SEPARATOR};
pub use paged::PagedResult;
pub use paging::{PageRequest, PagedInfo};
pub use result::Result;
pub use status::{ErrorType, ResultStatus, UnsupportedStatus};
