//! Path extractor with a result-shaped rejection.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use outcome::Outcome;

/// `axum::extract::Path` that rejects with an `Invalid` outcome.
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Outcome;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Outcome::invalid(e.body_text()))?;

        Ok(Path(value))
    }
}
