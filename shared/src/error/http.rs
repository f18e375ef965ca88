//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::RulesPathNotConfigured => StatusCode::NOT_FOUND,

            // 503: the snapshot file may appear later, client can retry
            Self::RulesUnavailable | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            Self::RulesInvalid => StatusCode::UNPROCESSABLE_ENTITY,

            Self::Unknown | Self::InternalError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation and estimate input errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::InvalidArea
            | Self::InvalidCoordinate
            | Self::TooManyPoints
            | Self::InvalidSpotCount => StatusCode::BAD_REQUEST,
        }
    }
}
