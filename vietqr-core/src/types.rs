/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema types and fixed literals for the NAPAS 247 payload schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a wire literal is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized wire literal '{0}'")]
pub struct UnknownLiteral(pub String);

/// Fixed value of the payload format indicator (field 00).
pub const PAYLOAD_FORMAT_VALUE: &str = "01";

/// NAPAS application GUID carried in the merchant account block.
pub const NAPAS_GUID: &str = "A000000727";

/// ISO 4217 numeric code for Vietnamese dong (field 53).
pub const CURRENCY_VND: &str = "704";

/// ISO 3166 country code for Vietnam (field 58).
pub const COUNTRY_VN: &str = "VN";

/// Point of initiation method (field 01).
///
/// A static payload leaves amount and message to the payer; a dynamic
/// payload pre-fills at least one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InitiationMethod {
    /// Static QR ("11"): payer supplies amount and message.
    #[default]
    Static,
    /// Dynamic QR ("12"): amount and/or message are pre-filled.
    Dynamic,
}

impl InitiationMethod {
    /// Returns the 2-digit wire literal for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "11",
            Self::Dynamic => "12",
        }
    }

    /// Returns true for dynamic payloads.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

impl fmt::Display for InitiationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InitiationMethod {
    type Err = UnknownLiteral;

    /// Parses the wire literal: anything other than "11" or "12" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "11" => Ok(Self::Static),
            "12" => Ok(Self::Dynamic),
            _ => Err(UnknownLiteral(s.to_string())),
        }
    }
}

/// NAPAS transfer service code (sub-field 02 of the merchant account block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    /// Transfer to account number ("QRIBFTTA").
    AccountTransfer,
    /// Transfer to card number ("QRIBFTTC").
    CardTransfer,
}

impl ServiceCode {
    /// Returns the wire literal for this service.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccountTransfer => "QRIBFTTA",
            Self::CardTransfer => "QRIBFTTC",
        }
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceCode {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QRIBFTTA" => Ok(Self::AccountTransfer),
            "QRIBFTTC" => Ok(Self::CardTransfer),
            _ => Err(UnknownLiteral(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiation_method_literals() {
        assert_eq!(InitiationMethod::Static.as_str(), "11");
        assert_eq!(InitiationMethod::Dynamic.as_str(), "12");
        assert_eq!("11".parse(), Ok(InitiationMethod::Static));
        assert_eq!("12".parse(), Ok(InitiationMethod::Dynamic));
        assert_eq!(
            "13".parse::<InitiationMethod>(),
            Err(UnknownLiteral("13".to_string()))
        );
        assert!("".parse::<InitiationMethod>().is_err());
    }

    #[test]
    fn test_service_code_literals() {
        assert_eq!(ServiceCode::AccountTransfer.as_str(), "QRIBFTTA");
        assert_eq!("QRIBFTTC".parse(), Ok(ServiceCode::CardTransfer));
        assert_eq!(
            "QRPUSH".parse::<ServiceCode>(),
            Err(UnknownLiteral("QRPUSH".to_string()))
        );
    }

    #[test]
    fn test_is_dynamic() {
        assert!(!InitiationMethod::Static.is_dynamic());
        assert!(InitiationMethod::Dynamic.is_dynamic());
    }
}
