/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the VietQR payload codec.
//!
//! This module provides a unified error hierarchy using `thiserror`. There are
//! exactly two failure kinds: [`BuildError`] for invalid caller-supplied
//! construction arguments, and [`ParseError`] for structural or semantic
//! violations found while walking an untrusted payload string. Both are
//! ordinary, expected outcomes of bad input; neither is retried internally.

use crate::field::FieldId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using [`QrError`] as the error type.
pub type Result<T> = std::result::Result<T, QrError>;

/// Top-level error type for all VietQR operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Error while building a payload from a transfer descriptor.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// Error while parsing an untrusted payload string.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors raised by the encoder before any rendering occurs.
///
/// These all describe preconditions the caller violated when assembling a
/// [`QrTransfer`](crate::transfer::QrTransfer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The account number is empty.
    #[error("account number must not be empty")]
    EmptyAccountNumber,

    /// The amount is negative.
    #[error("amount must not be negative, got {amount}")]
    NegativeAmount {
        /// The offending amount.
        amount: Decimal,
    },

    /// The amount does not fit an integral VND value.
    #[error("amount out of range: {amount}")]
    AmountOutOfRange {
        /// The offending amount.
        amount: Decimal,
    },

    /// Neither a catalog bank nor an explicit BIN was supplied.
    #[error("beneficiary bank missing: supply a catalog bank or a 6-digit BIN")]
    MissingBeneficiary,

    /// Both a catalog bank and an explicit BIN were supplied.
    #[error("beneficiary bank ambiguous: supply a catalog bank or a BIN, not both")]
    AmbiguousBeneficiary,

    /// An explicit BIN was supplied but is not exactly 6 decimal digits.
    #[error("invalid BIN '{bin}': expected exactly 6 decimal digits")]
    InvalidBin {
        /// The offending BIN string.
        bin: String,
    },

    /// A field value exceeds the 99-byte limit a 2-digit length can declare.
    #[error("value too long for field {id}: {length} bytes exceeds maximum 99")]
    ValueTooLong {
        /// The field being rendered.
        id: FieldId,
        /// Byte length of the offending value.
        length: usize,
    },
}

/// Errors raised by the decoder while walking an untrusted payload.
///
/// Parsing is all-or-nothing: a [`ParsedQr`](crate::transfer::ParsedQr) is
/// never partially constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The payload string is empty.
    #[error("payload is empty")]
    Empty,

    /// The payload is shorter than the minimum checksum-field footprint.
    #[error("payload too short: {length} chars, need at least 8")]
    TooShort {
        /// Actual payload length.
        length: usize,
    },

    /// A field identifier is not 2 ASCII digits.
    #[error("invalid field id at offset {offset}")]
    InvalidFieldId {
        /// Byte offset of the offending header.
        offset: usize,
    },

    /// A length marker is not exactly 2 decimal digits.
    #[error("invalid length marker '{raw}' for field {id}")]
    InvalidLengthMarker {
        /// The field whose length marker is malformed.
        id: FieldId,
        /// The raw 2-character marker.
        raw: String,
    },

    /// A declared field length reads past the end of the remaining input.
    #[error("field {id} declares {declared} bytes but only {remaining} remain")]
    ValueOutOfBounds {
        /// The field whose value is truncated.
        id: FieldId,
        /// Declared value length.
        declared: usize,
        /// Bytes actually remaining after the header.
        remaining: usize,
    },

    /// Leftover bytes too short to form another field header.
    #[error("trailing bytes at offset {offset} do not form a field header")]
    TrailingData {
        /// Byte offset where the leftover starts.
        offset: usize,
    },

    /// The payload does not end with a checksum field (id 63).
    #[error("payload does not terminate with a checksum field (id 63)")]
    MissingChecksumField,

    /// The checksum field does not declare exactly 4 characters.
    #[error("checksum field must carry exactly 4 characters, got '{raw}'")]
    InvalidChecksumLength {
        /// The raw checksum value found.
        raw: String,
    },

    /// The recomputed checksum does not match the declared one.
    #[error("checksum mismatch: calculated {calculated}, declared {declared}")]
    ChecksumMismatch {
        /// Checksum recomputed over the payload prefix.
        calculated: String,
        /// Checksum carried in the payload.
        declared: String,
    },

    /// A required top-level field is absent.
    #[error("missing required field {id}")]
    MissingRequiredField {
        /// The absent field.
        id: FieldId,
    },

    /// A required field holds an unexpected literal value.
    #[error("unexpected value for field {id}: expected {expected}, got '{actual}'")]
    UnexpectedFieldValue {
        /// The offending field.
        id: FieldId,
        /// The value(s) the schema allows.
        expected: &'static str,
        /// The value actually present.
        actual: String,
    },

    /// The merchant account block is missing a required sub-field.
    #[error("merchant account info missing required sub-field {id}")]
    MissingMerchantField {
        /// The absent sub-field, relative to its enclosing block.
        id: FieldId,
    },

    /// The beneficiary routing identifier is not 6 decimal digits.
    #[error("invalid routing identifier '{raw}': expected exactly 6 decimal digits")]
    InvalidRoutingId {
        /// The raw routing identifier found.
        raw: String,
    },

    /// The beneficiary account number is empty.
    #[error("beneficiary account number is empty")]
    EmptyAccountNumber,

    /// The amount field is present but not a non-negative decimal integer.
    #[error("invalid amount '{raw}': expected a non-negative decimal integer")]
    InvalidAmount {
        /// The raw amount value found.
        raw: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::ChecksumMismatch {
            calculated: "A1B2".to_string(),
            declared: "FFFF".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: calculated A1B2, declared FFFF"
        );
    }

    #[test]
    fn test_build_error_display() {
        let err = BuildError::InvalidBin {
            bin: "97".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid BIN '97': expected exactly 6 decimal digits"
        );
    }

    #[test]
    fn test_qr_error_from_parse() {
        let parse_err = ParseError::Empty;
        let err: QrError = parse_err.into();
        assert!(matches!(err, QrError::Parse(ParseError::Empty)));
    }

    #[test]
    fn test_field_id_in_message() {
        let err = ParseError::MissingRequiredField {
            id: FieldId::MERCHANT_ACCOUNT,
        };
        assert_eq!(err.to_string(), "missing required field 38");
    }
}
