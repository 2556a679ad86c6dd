//! Custom extractors.
//!
//! Each one rejects with an `Invalid` or `ValidationError` outcome so that
//! malformed requests still get a JSON result body.

mod path;
mod query;
mod validated_json;

pub use path::Path;
pub use query::Query;
pub use validated_json::ValidatedJson;
