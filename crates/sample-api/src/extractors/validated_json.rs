//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use outcome::Outcome;

/// JSON extractor that automatically validates the payload.
///
/// Malformed bodies are rejected with an `Invalid` outcome, rule violations
/// with a `ValidationError` outcome listing every failing property.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Outcome;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| Outcome::invalid(e.body_text()))?;

        value.validate().map_err(|e| Outcome::invalid_input(&e))?;

        Ok(ValidatedJson(value))
    }
}
