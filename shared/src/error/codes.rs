//! Unified error codes for the storefront
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog errors
//! - 2xxx: Configuration errors
//! - 3xxx: Lead errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
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
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 1001,
    /// Category not found
    CategoryNotFound = 1002,
    /// Product has invalid price
    ProductInvalidPrice = 1003,
    /// Duplicate product id in catalog source
    DuplicateProductId = 1004,
    /// Duplicate category id in catalog source
    DuplicateCategoryId = 1005,
    /// Duplicate tent id within a product
    DuplicateTentId = 1006,
    /// Duplicate accessory id within a product
    DuplicateAccessoryId = 1007,
    /// Option group default is not one of its listed options
    OptionDefaultNotListed = 1008,

    // ==================== 2xxx: Configuration ====================
    /// Catalog data has not been loaded yet
    CatalogNotLoaded = 2001,
    /// Wheel label is not one of the product's wheel options
    InvalidWheelSelection = 2002,
    /// Hub label is not one of the product's hub options
    InvalidHubSelection = 2003,
    /// Tent id is not offered for the product
    InvalidTentSelection = 2004,
    /// Accessory id is not offered for the product
    InvalidAccessorySelection = 2005,
    /// Accessory exists but is not currently available
    AccessoryUnavailable = 2006,

    // ==================== 3xxx: Lead ====================
    /// Contact name is missing
    MissingContactName = 3001,
    /// Contact phone is missing
    MissingContactPhone = 3002,
    /// Lead was rejected
    LeadRejected = 3003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Catalog source could not be read or parsed
    CatalogSourceError = 9002,
    /// Lead notification delivery failed
    NotifyFailed = 9003,
    /// Network error
    NetworkError = 9004,
    /// Operation timeout
    TimeoutError = 9005,
    /// Configuration error
    ConfigError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::DuplicateProductId => "Duplicate product id in catalog source",
            ErrorCode::DuplicateCategoryId => "Duplicate category id in catalog source",
            ErrorCode::DuplicateTentId => "Duplicate tent id within a product",
            ErrorCode::DuplicateAccessoryId => "Duplicate accessory id within a product",
            ErrorCode::OptionDefaultNotListed => {
                "Option group default is not one of its listed options"
            }

            // Configuration
            ErrorCode::CatalogNotLoaded => "Catalog data has not been loaded yet",
            ErrorCode::InvalidWheelSelection => "Wheel label is not offered for this product",
            ErrorCode::InvalidHubSelection => "Hub label is not offered for this product",
            ErrorCode::InvalidTentSelection => "Tent is not offered for this product",
            ErrorCode::InvalidAccessorySelection => "Accessory is not offered for this product",
            ErrorCode::AccessoryUnavailable => "Accessory is not currently available",

            // Lead
            ErrorCode::MissingContactName => "Contact name is required",
            ErrorCode::MissingContactPhone => "Contact phone is required",
            ErrorCode::LeadRejected => "Lead was rejected",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::CatalogSourceError => "Catalog source could not be read",
            ErrorCode::NotifyFailed => "Lead notification delivery failed",
            ErrorCode::NetworkError => "Network error",
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
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Catalog
            1001 => Ok(ErrorCode::ProductNotFound),
            1002 => Ok(ErrorCode::CategoryNotFound),
            1003 => Ok(ErrorCode::ProductInvalidPrice),
            1004 => Ok(ErrorCode::DuplicateProductId),
            1005 => Ok(ErrorCode::DuplicateCategoryId),
            1006 => Ok(ErrorCode::DuplicateTentId),
            1007 => Ok(ErrorCode::DuplicateAccessoryId),
            1008 => Ok(ErrorCode::OptionDefaultNotListed),

            // Configuration
            2001 => Ok(ErrorCode::CatalogNotLoaded),
            2002 => Ok(ErrorCode::InvalidWheelSelection),
            2003 => Ok(ErrorCode::InvalidHubSelection),
            2004 => Ok(ErrorCode::InvalidTentSelection),
            2005 => Ok(ErrorCode::InvalidAccessorySelection),
            2006 => Ok(ErrorCode::AccessoryUnavailable),

            // Lead
            3001 => Ok(ErrorCode::MissingContactName),
            3002 => Ok(ErrorCode::MissingContactPhone),
            3003 => Ok(ErrorCode::LeadRejected),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::CatalogSourceError),
            9003 => Ok(ErrorCode::NotifyFailed),
            9004 => Ok(ErrorCode::NetworkError),
            9005 => Ok(ErrorCode::TimeoutError),
            9006 => Ok(ErrorCode::ConfigError),

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
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Catalog
        assert_eq!(ErrorCode::ProductNotFound.code(), 1001);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 1002);
        assert_eq!(ErrorCode::ProductInvalidPrice.code(), 1003);
        assert_eq!(ErrorCode::DuplicateProductId.code(), 1004);
        assert_eq!(ErrorCode::DuplicateCategoryId.code(), 1005);
        assert_eq!(ErrorCode::DuplicateTentId.code(), 1006);
        assert_eq!(ErrorCode::DuplicateAccessoryId.code(), 1007);
        assert_eq!(ErrorCode::OptionDefaultNotListed.code(), 1008);

        // Configuration
        assert_eq!(ErrorCode::CatalogNotLoaded.code(), 2001);
        assert_eq!(ErrorCode::InvalidWheelSelection.code(), 2002);
        assert_eq!(ErrorCode::InvalidHubSelection.code(), 2003);
        assert_eq!(ErrorCode::InvalidTentSelection.code(), 2004);
        assert_eq!(ErrorCode::InvalidAccessorySelection.code(), 2005);
        assert_eq!(ErrorCode::AccessoryUnavailable.code(), 2006);

        // Lead
        assert_eq!(ErrorCode::MissingContactName.code(), 3001);
        assert_eq!(ErrorCode::MissingContactPhone.code(), 3002);
        assert_eq!(ErrorCode::LeadRejected.code(), 3003);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::CatalogSourceError.code(), 9002);
        assert_eq!(ErrorCode::NotifyFailed.code(), 9003);
        assert_eq!(ErrorCode::NetworkError.code(), 9004);
        assert_eq!(ErrorCode::TimeoutError.code(), 9005);
        assert_eq!(ErrorCode::ConfigError.code(), 9006);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::ProductNotFound));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::CatalogNotLoaded));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::MissingContactName));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
    }

    #[test]
    fn test_from_error_code_to_u16() {
        let code: u16 = ErrorCode::Success.into();
        assert_eq!(code, 0);

        let code: u16 = ErrorCode::ProductNotFound.into();
        assert_eq!(code, 1001);

        let code: u16 = ErrorCode::InternalError.into();
        assert_eq!(code, 9001);
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::InvalidTentSelection;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "2004");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, ErrorCode::NotFound);

        let code: ErrorCode = serde_json::from_str("2004").unwrap();
        assert_eq!(code, ErrorCode::InvalidTentSelection);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::InvalidTentSelection), "2004");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(ErrorCode::ProductNotFound.message(), "Product not found");
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_roundtrip() {
        // Test that serialization -> deserialization roundtrip works
        let codes = [
            ErrorCode::Success,
            ErrorCode::ProductNotFound,
            ErrorCode::CatalogNotLoaded,
            ErrorCode::MissingContactPhone,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_debug() {
        // Test that Debug derive works correctly
        let debug_str = format!("{:?}", ErrorCode::Success);
        assert_eq!(debug_str, "Success");

        let debug_str = format!("{:?}", ErrorCode::InvalidWheelSelection);
        assert_eq!(debug_str, "InvalidWheelSelection");
    }

    #[test]
    fn test_clone_copy() {
        let code = ErrorCode::Success;
        let cloned = code.clone();
        let copied = code;

        assert_eq!(code, cloned);
        assert_eq!(code, copied);
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ErrorCode::Success);
        set.insert(ErrorCode::NotFound);
        set.insert(ErrorCode::Success); // Duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&ErrorCode::Success));
        assert!(set.contains(&ErrorCode::NotFound));
    }
}
