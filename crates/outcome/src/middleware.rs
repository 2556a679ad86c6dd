//! Panic boundary: turns an unhandled panic in a handler into a `Failure`
//! result with a trace identifier.

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use uuid::Uuid;

use crate::combinators::panic_message;
use crate::config::{Environment, HttpConfig, GENERIC_FAILURE_MESSAGE};
use crate::outcome::Outcome;

/// Metadata key carrying the trace identifier of a caught panic.
pub const TRACE_ID_KEY: &str = "TraceId";

/// Builds the `Failure` response for a caught panic.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    environment: Environment,
}

impl PanicResponder {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// The failure reported for a panic payload.
    ///
    /// The raw panic message is only exposed in development.
    pub fn outcome_for(&self, payload: &(dyn Any + Send), trace_id: &str) -> Outcome {
        let message = if self.environment.is_development() {
            panic_message(payload)
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        };

        let mut outcome = Outcome::failure(message).with_correlation_id(trace_id);
        outcome.add_or_update_metadata(TRACE_ID_KEY, trace_id);
        outcome
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let trace_id = Uuid::new_v4().to_string();
        tracing::error!(
            trace_id = %trace_id,
            panic = %panic_message(err.as_ref()),
            "unhandled panic while serving request"
        );

        let outcome = self.outcome_for(err.as_ref(), &trace_id);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(outcome)).into_response()
    }
}

/// Layer catching handler panics and answering with a `Failure` result.
pub fn catch_panic_layer(config: &HttpConfig) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder::new(config.environment))
}
