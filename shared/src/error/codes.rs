//! Unified error codes for the estimation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Estimate input errors
//! - 5xxx: Pricing rule snapshot errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the web client can switch
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Estimate ====================
    /// Area is negative, not finite or too large
    InvalidArea = 4001,
    /// Latitude/longitude outside the valid range
    InvalidCoordinate = 4002,
    /// Polygon has more points than allowed
    TooManyPoints = 4003,
    /// Parking spot count outside the allowed range
    InvalidSpotCount = 4004,

    // ==================== 5xxx: Pricing rules ====================
    /// Rule snapshot file could not be read
    RulesUnavailable = 5001,
    /// Rule snapshot file is not a valid rule list
    RulesInvalid = 5002,
    /// No rule snapshot path configured
    RulesPathNotConfigured = 5003,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    TimeoutError = 9004,
    ConfigError = 9005,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Estimate
            ErrorCode::InvalidArea => "Area must be a finite, non-negative number",
            ErrorCode::InvalidCoordinate => "Coordinate is out of range",
            ErrorCode::TooManyPoints => "Polygon has too many points",
            ErrorCode::InvalidSpotCount => "Parking spot count is out of range",

            // Pricing rules
            ErrorCode::RulesUnavailable => "Pricing rules could not be loaded",
            ErrorCode::RulesInvalid => "Pricing rules file is malformed",
            ErrorCode::RulesPathNotConfigured => "No pricing rules file is configured",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Estimate
            4001 => Ok(ErrorCode::InvalidArea),
            4002 => Ok(ErrorCode::InvalidCoordinate),
            4003 => Ok(ErrorCode::TooManyPoints),
            4004 => Ok(ErrorCode::InvalidSpotCount),

            // Pricing rules
            5001 => Ok(ErrorCode::RulesUnavailable),
            5002 => Ok(ErrorCode::RulesInvalid),
            5003 => Ok(ErrorCode::RulesPathNotConfigured),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidArea.code(), 4001);
        assert_eq!(ErrorCode::RulesInvalid.code(), 5002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::InvalidArea.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::InvalidCoordinate));
        assert_eq!(ErrorCode::try_from(5003), Ok(ErrorCode::RulesPathNotConfigured));
        assert_eq!(ErrorCode::try_from(9005), Ok(ErrorCode::ConfigError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::InvalidArea).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("5001").unwrap();
        assert_eq!(code, ErrorCode::RulesUnavailable);

        let result: Result<ErrorCode, _> = serde_json::from_str("12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_every_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::InvalidArea,
            ErrorCode::InvalidCoordinate,
            ErrorCode::TooManyPoints,
            ErrorCode::InvalidSpotCount,
            ErrorCode::RulesUnavailable,
            ErrorCode::RulesInvalid,
            ErrorCode::RulesPathNotConfigured,
            ErrorCode::InternalError,
            ErrorCode::TimeoutError,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::TooManyPoints), "4003");
    }
}
