//! Query extractor with a result-shaped rejection.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use outcome::Outcome;

/// `axum::extract::Query` that rejects with an `Invalid` outcome.
pub struct Query<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Query<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Outcome;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Outcome::invalid(e.body_text()))?;

        Ok(Query(value))
    }
}
