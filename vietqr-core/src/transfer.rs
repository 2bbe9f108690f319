/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Transfer descriptor and parsed-result types.
//!
//! This module provides:
//! - [`QrTransfer`]: The caller-facing description of a bank transfer, fed to
//!   the encoder
//! - [`ParsedQr`]: The immutable result of successfully decoding a payload

use crate::text::normalize;
use crate::types::{InitiationMethod, ServiceCode};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use vietqr_banks::Bank;

/// Description of a bank transfer to encode as a QR payload.
///
/// The beneficiary bank is identified either by a catalog [`Bank`] or by an
/// explicit 6-digit BIN; supplying both, or neither, is a build error. The
/// amount is in VND and truncated to a whole number at encode time; a zero
/// amount is indistinguishable from "not specified" and is omitted from the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrTransfer {
    /// Beneficiary bank from the catalog, if known.
    pub bank: Option<Bank>,
    /// Explicit 6-digit BIN, for banks outside the catalog.
    pub bin: Option<String>,
    /// Beneficiary account number.
    pub account: String,
    /// Transfer amount in VND, if pre-filled.
    pub amount: Option<Decimal>,
    /// Free-text transaction purpose, if pre-filled. Normalized to ASCII
    /// before embedding.
    pub message: Option<String>,
}

impl QrTransfer {
    /// Creates a transfer to an account at a catalog bank.
    ///
    /// # Arguments
    /// * `bank` - The beneficiary bank
    /// * `account` - The beneficiary account number
    #[must_use]
    pub fn to_bank(bank: Bank, account: impl Into<String>) -> Self {
        Self {
            bank: Some(bank),
            bin: None,
            account: account.into(),
            amount: None,
            message: None,
        }
    }

    /// Creates a transfer to an account identified by an explicit BIN.
    ///
    /// # Arguments
    /// * `bin` - The 6-digit bank identification number
    /// * `account` - The beneficiary account number
    #[must_use]
    pub fn to_bin(bin: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            bank: None,
            bin: Some(bin.into()),
            account: account.into(),
            amount: None,
            message: None,
        }
    }

    /// Sets the transfer amount in VND.
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the free-text transaction purpose.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the amount that will actually be embedded: truncated to an
    /// integral VND value, and only if strictly positive.
    #[must_use]
    pub fn effective_amount(&self) -> Option<u64> {
        self.amount
            .and_then(|a| a.trunc().to_u64())
            .filter(|&a| a > 0)
    }

    /// Returns the normalized message that will actually be embedded, or
    /// `None` when the message is absent or normalizes to nothing.
    #[must_use]
    pub fn normalized_message(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(normalize)
            .filter(|m| !m.is_empty())
    }

    /// Returns true if this transfer produces a dynamic payload: an amount
    /// or a message will be embedded.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.effective_amount().is_some() || self.normalized_message().is_some()
    }
}

/// Immutable result of successfully decoding a payload.
///
/// Constructed atomically by the decoder, only on a fully successful parse.
/// Equality and hashing are structural over the full attribute set,
/// including the raw checksum string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedQr {
    /// Beneficiary bank resolved from the catalog, if the BIN is known.
    pub bank: Option<Bank>,
    /// Raw 6-digit routing identifier from the beneficiary block.
    pub bin: String,
    /// Beneficiary account number.
    pub account: String,
    /// Transfer amount in whole VND, if field 54 was present.
    pub amount: Option<u64>,
    /// Transaction purpose from field 62, if present.
    pub message: Option<String>,
    /// Payload format indicator (field 00).
    pub payload_format: String,
    /// Point of initiation method (field 01).
    pub initiation: InitiationMethod,
    /// Currency code (field 53).
    pub currency: String,
    /// Country code (field 58).
    pub country: String,
    /// Service code from the merchant account block, raw, if present.
    pub service_code: Option<String>,
    /// Raw 4-character checksum carried in the payload.
    pub checksum: String,
}

impl ParsedQr {
    /// Returns true if the payload was marked dynamic (initiation "12").
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.initiation.is_dynamic()
    }

    /// Returns the service code parsed into its known variants
    /// (account or card transfer), or `None` when the merchant account
    /// block carried no service code or an unrecognized one. The raw
    /// text stays available in [`service_code`](Self::service_code).
    #[must_use]
    pub fn service(&self) -> Option<ServiceCode> {
        self.service_code.as_deref().and_then(|s| s.parse().ok())
    }

    /// Returns a human-readable bank name: the catalog short name, or a
    /// fallback embedding the raw BIN for banks outside the catalog.
    #[must_use]
    pub fn bank_name(&self) -> String {
        match self.bank {
            Some(bank) => bank.short_name().to_string(),
            None => format!("BIN {}", self.bin),
        }
    }

    /// Returns the amount with thousands grouping (e.g. "150,000"), or
    /// "unspecified" when the payload carries no amount.
    #[must_use]
    pub fn amount_display(&self) -> String {
        match self.amount {
            Some(amount) => group_thousands(amount),
            None => "unspecified".to_string(),
        }
    }
}

impl fmt::Display for ParsedQr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} VND)",
            self.bank_name(),
            self.account,
            self.amount_display()
        )
    }
}

/// Renders an integer with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedQr {
        ParsedQr {
            bank: Some(Bank::Techcombank),
            bin: "970407".to_string(),
            account: "9602091996".to_string(),
            amount: None,
            message: None,
            payload_format: "01".to_string(),
            initiation: InitiationMethod::Static,
            currency: "704".to_string(),
            country: "VN".to_string(),
            service_code: Some("QRIBFTTA".to_string()),
            checksum: "AB12".to_string(),
        }
    }

    #[test]
    fn test_effective_amount() {
        let t = QrTransfer::to_bank(Bank::MbBank, "123");
        assert_eq!(t.effective_amount(), None);
        assert_eq!(
            t.clone().with_amount(Decimal::from(150_000)).effective_amount(),
            Some(150_000)
        );
        // fractional VND is truncated
        assert_eq!(
            t.clone().with_amount(Decimal::new(15_000_075, 2)).effective_amount(),
            Some(150_000)
        );
        assert_eq!(t.clone().with_amount(Decimal::ZERO).effective_amount(), None);
        assert_eq!(
            t.clone().with_amount(Decimal::new(9, 1)).effective_amount(),
            None
        );
    }

    #[test]
    fn test_is_dynamic() {
        let t = QrTransfer::to_bank(Bank::MbBank, "123");
        assert!(!t.is_dynamic());
        assert!(t.clone().with_amount(Decimal::ONE).is_dynamic());
        assert!(t.clone().with_message("tien nha").is_dynamic());
        // a message that normalizes to nothing does not make it dynamic
        assert!(!t.clone().with_message("!!!").is_dynamic());
        assert!(!t.with_amount(Decimal::ZERO).is_dynamic());
    }

    #[test]
    fn test_bank_name_fallback() {
        let mut qr = sample();
        assert_eq!(qr.bank_name(), "Techcombank");
        qr.bank = None;
        qr.bin = "123456".to_string();
        assert_eq!(qr.bank_name(), "BIN 123456");
    }

    #[test]
    fn test_amount_display() {
        let mut qr = sample();
        assert_eq!(qr.amount_display(), "unspecified");
        qr.amount = Some(150000);
        assert_eq!(qr.amount_display(), "150,000");
        qr.amount = Some(999);
        assert_eq!(qr.amount_display(), "999");
        qr.amount = Some(1_000_000);
        assert_eq!(qr.amount_display(), "1,000,000");
    }

    #[test]
    fn test_service_accessor() {
        let mut qr = sample();
        assert_eq!(qr.service(), Some(ServiceCode::AccountTransfer));
        qr.service_code = Some("QRIBFTTC".to_string());
        assert_eq!(qr.service(), Some(ServiceCode::CardTransfer));
        qr.service_code = Some("QRPUSH".to_string());
        assert_eq!(qr.service(), None);
        qr.service_code = None;
        assert_eq!(qr.service(), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);
        b.checksum = "0000".to_string();
        assert_ne!(a, b);
    }
}
