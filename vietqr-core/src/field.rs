/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field types for the TLV payload format.
//!
//! This module provides:
//! - [`FieldId`]: Type-safe wrapper for 2-digit TLV field identifiers
//! - [`FieldRef`]: Zero-copy reference to a field within a payload string

use serde::{Deserialize, Serialize};
use std::fmt;

/// TLV field identifier.
///
/// Identifiers are rendered on the wire as exactly 2 ASCII decimal digits,
/// so the valid range is 0-99. The same identifier space is reused at every
/// nesting level: id 01 means "initiation method" at the top level but
/// "beneficiary block" inside the merchant account field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldId(u8);

impl FieldId {
    /// Payload format indicator (top level).
    pub const PAYLOAD_FORMAT: Self = Self(0);
    /// Point of initiation method (top level).
    pub const INITIATION_METHOD: Self = Self(1);
    /// Merchant account information, nested (top level).
    pub const MERCHANT_ACCOUNT: Self = Self(38);
    /// Transaction currency (top level).
    pub const CURRENCY: Self = Self(53);
    /// Transaction amount, optional (top level).
    pub const AMOUNT: Self = Self(54);
    /// Country code (top level).
    pub const COUNTRY: Self = Self(58);
    /// Additional data, optional and nested (top level).
    pub const ADDITIONAL_DATA: Self = Self(62);
    /// CRC checksum, always last (top level).
    pub const CHECKSUM: Self = Self(63);

    /// Scheme GUID (inside field 38).
    pub const GUID: Self = Self(0);
    /// Beneficiary block, nested (inside field 38).
    pub const BENEFICIARY: Self = Self(1);
    /// Service code (inside field 38).
    pub const SERVICE_CODE: Self = Self(2);

    /// Routing identifier / BIN (inside the beneficiary block).
    pub const ROUTING_ID: Self = Self(0);
    /// Account number (inside the beneficiary block).
    pub const ACCOUNT_NUMBER: Self = Self(1);

    /// Free-text transaction purpose (inside field 62).
    pub const PURPOSE: Self = Self(8);

    /// Creates a new field identifier.
    ///
    /// # Arguments
    /// * `id` - The identifier value (0-99)
    #[inline]
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parses an identifier from its 2-ASCII-digit wire form.
    ///
    /// # Arguments
    /// * `bytes` - The 2 header bytes
    ///
    /// # Returns
    /// The identifier, or `None` if either byte is not an ASCII digit.
    #[inline]
    #[must_use]
    pub const fn from_digits(bytes: [u8; 2]) -> Option<Self> {
        if bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit() {
            Some(Self((bytes[0] - b'0') * 10 + (bytes[1] - b'0')))
        } else {
            None
        }
    }

    /// Renders the identifier as its 2-digit wire form.
    #[inline]
    #[must_use]
    pub const fn to_digits(self) -> [u8; 2] {
        [b'0' + self.0 / 10, b'0' + self.0 % 10]
    }
}

impl From<u8> for FieldId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl From<FieldId> for u8 {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Zero-copy reference to a field within a payload string.
///
/// Holds the identifier and a slice of the original payload, avoiding
/// allocation during parsing.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    /// The field identifier.
    pub id: FieldId,
    /// Reference to the field value (without the id/length header).
    pub value: &'a str,
}

impl<'a> FieldRef<'a> {
    /// Creates a new field reference.
    ///
    /// # Arguments
    /// * `id` - The field identifier
    /// * `value` - Reference to the value slice
    #[inline]
    #[must_use]
    pub const fn new(id: FieldId, value: &'a str) -> Self {
        Self { id, value }
    }

    /// Returns the value slice.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.value
    }

    /// Returns the length of the value in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_display() {
        assert_eq!(FieldId::new(0).to_string(), "00");
        assert_eq!(FieldId::new(8).to_string(), "08");
        assert_eq!(FieldId::new(38).to_string(), "38");
        assert_eq!(FieldId::new(99).to_string(), "99");
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(FieldId::from_digits(*b"00"), Some(FieldId::new(0)));
        assert_eq!(FieldId::from_digits(*b"63"), Some(FieldId::CHECKSUM));
        assert_eq!(FieldId::from_digits(*b"6a"), None);
        assert_eq!(FieldId::from_digits(*b"??"), None);
    }

    #[test]
    fn test_to_digits_roundtrip() {
        for n in 0..=99u8 {
            let id = FieldId::new(n);
            assert_eq!(FieldId::from_digits(id.to_digits()), Some(id));
        }
    }

    #[test]
    fn test_field_ref() {
        let field = FieldRef::new(FieldId::CURRENCY, "704");
        assert_eq!(field.as_str(), "704");
        assert_eq!(field.len(), 3);
        assert!(!field.is_empty());
    }
}
