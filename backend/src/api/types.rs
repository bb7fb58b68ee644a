//! REST API response helpers.
//!
//! The area endpoint serialises [`AreaProfile`] directly; this module
//! carries the error body and the status-code mapping for accessor
//! failures.
//!
//! [`AreaProfile`]: crate::view::AreaProfile

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{AccessError, ProfileError, RecordError};

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            postcode: None,
        }
    }

    pub fn for_postcode(error: impl Into<String>, postcode: &str) -> Self {
        Self {
            error: error.into(),
            postcode: Some(postcode.to_string()),
        }
    }
}

/// Map a profile failure onto an HTTP status.
///
/// An empty record means the postcode has no data (404). Ambiguous
/// records and field failures are problems with the dataset or request
/// vocabulary (422); they are surfaced, never swallowed.
pub fn status_for(error: &ProfileError) -> StatusCode {
    match error {
        ProfileError::Record(RecordError::Empty) => StatusCode::NOT_FOUND,
        ProfileError::Record(RecordError::Ambiguous(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        ProfileError::Access(AccessError::InvalidAgeBand(_))
        | ProfileError::Access(AccessError::UnknownAncestry(_)) => StatusCode::BAD_REQUEST,
        ProfileError::Access(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
