/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Payload encoder.
//!
//! This module builds the flat payload string from a transfer descriptor.
//! Each field is rendered as `id + zero-padded-2-digit-length + value`;
//! nested fields render their children first and embed the rendered child
//! string as their own value, so a declared length is always the byte length
//! of the *rendered* content.

use crate::checksum::{calculate_checksum, format_checksum};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use vietqr_core::error::BuildError;
use vietqr_core::field::FieldId;
use vietqr_core::transfer::QrTransfer;
use vietqr_core::types::{
    CURRENCY_VND, COUNTRY_VN, InitiationMethod, NAPAS_GUID, PAYLOAD_FORMAT_VALUE, ServiceCode,
};

/// Maximum byte length a 2-digit length marker can declare.
pub const MAX_VALUE_LEN: usize = 99;

/// TLV record encoder.
///
/// Appends `id + length + value` records into a string buffer. Nested fields
/// are built by composing a child encoder and embedding its output with
/// [`put_nested`](Self::put_nested). [`finish`](Self::finish) appends the
/// checksum field and returns the completed payload.
#[derive(Debug, Default)]
pub struct Encoder {
    /// Rendered records so far.
    buf: String,
}

impl Encoder {
    /// Creates a new empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Creates a new encoder with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends a field with a string value.
    ///
    /// # Arguments
    /// * `id` - The field identifier
    /// * `value` - The field value
    ///
    /// # Errors
    /// Returns `BuildError::ValueTooLong` if the value exceeds 99 bytes.
    pub fn put_field(&mut self, id: FieldId, value: &str) -> Result<(), BuildError> {
        let length = value.len();
        if length > MAX_VALUE_LEN {
            return Err(BuildError::ValueTooLong { id, length });
        }

        for b in id.to_digits() {
            self.buf.push(b as char);
        }
        self.buf.push((b'0' + (length / 10) as u8) as char);
        self.buf.push((b'0' + (length % 10) as u8) as char);
        self.buf.push_str(value);
        Ok(())
    }

    /// Appends a field with an unsigned integer value.
    ///
    /// # Arguments
    /// * `id` - The field identifier
    /// * `value` - The field value
    ///
    /// # Errors
    /// Returns `BuildError::ValueTooLong` if the rendering exceeds 99 bytes.
    pub fn put_uint(&mut self, id: FieldId, value: u64) -> Result<(), BuildError> {
        let mut buf = itoa::Buffer::new();
        self.put_field(id, buf.format(value))
    }

    /// Appends a nested field whose value is another encoder's rendering.
    ///
    /// The declared length is computed on the rendered child string, which is
    /// the central structural rule of the format.
    ///
    /// # Arguments
    /// * `id` - The field identifier
    /// * `child` - The encoder holding the rendered sub-fields
    ///
    /// # Errors
    /// Returns `BuildError::ValueTooLong` if the rendered child exceeds 99 bytes.
    pub fn put_nested(&mut self, id: FieldId, child: &Encoder) -> Result<(), BuildError> {
        self.put_field(id, child.as_str())
    }

    /// Returns the rendered records so far.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the current rendered length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been rendered yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the encoder for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Finalizes the payload and returns the complete string.
    ///
    /// Appends the checksum field header (`6304`), computes the CRC over
    /// everything rendered so far including that header, and appends the 4
    /// uppercase hex digits in place of the value.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.buf.push_str("6304");
        let checksum = calculate_checksum(self.buf.as_bytes());
        for b in format_checksum(checksum) {
            self.buf.push(b as char);
        }
        self.buf
    }
}

/// Encodes a transfer descriptor into a complete payload string.
///
/// Fields are emitted in fixed schema order: format indicator, initiation
/// method, merchant account (GUID, beneficiary block, service code),
/// currency, amount (only when strictly positive), country, additional data
/// (only when the normalized message is non-empty), checksum. Optional fields
/// are omitted entirely, never emitted empty.
///
/// # Arguments
/// * `transfer` - The transfer descriptor
///
/// # Errors
/// Returns `BuildError` when the account number is empty, the amount is
/// negative or does not fit integral VND, the beneficiary bank is missing or
/// ambiguous, or an explicit BIN is not exactly 6 decimal digits.
pub fn encode_transfer(transfer: &QrTransfer) -> Result<String, BuildError> {
    let bin: &str = match (&transfer.bank, &transfer.bin) {
        (Some(_), Some(_)) => return Err(BuildError::AmbiguousBeneficiary),
        (None, None) => return Err(BuildError::MissingBeneficiary),
        (Some(bank), None) => bank.bin(),
        (None, Some(bin)) => {
            if bin.len() != 6 || !bin.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BuildError::InvalidBin { bin: bin.clone() });
            }
            bin
        }
    };

    if transfer.account.is_empty() {
        return Err(BuildError::EmptyAccountNumber);
    }

    let amount = match transfer.amount {
        None => None,
        Some(a) if a < Decimal::ZERO => return Err(BuildError::NegativeAmount { amount: a }),
        Some(a) => match a.trunc().to_u64() {
            Some(0) => None,
            Some(v) => Some(v),
            None => return Err(BuildError::AmountOutOfRange { amount: a }),
        },
    };

    let message = transfer.normalized_message();
    let method = if amount.is_some() || message.is_some() {
        InitiationMethod::Dynamic
    } else {
        InitiationMethod::Static
    };

    let mut enc = Encoder::with_capacity(128);
    enc.put_field(FieldId::PAYLOAD_FORMAT, PAYLOAD_FORMAT_VALUE)?;
    enc.put_field(FieldId::INITIATION_METHOD, method.as_str())?;

    let mut beneficiary = Encoder::new();
    beneficiary.put_field(FieldId::ROUTING_ID, bin)?;
    beneficiary.put_field(FieldId::ACCOUNT_NUMBER, &transfer.account)?;

    let mut merchant = Encoder::new();
    merchant.put_field(FieldId::GUID, NAPAS_GUID)?;
    merchant.put_nested(FieldId::BENEFICIARY, &beneficiary)?;
    merchant.put_field(FieldId::SERVICE_CODE, ServiceCode::AccountTransfer.as_str())?;
    enc.put_nested(FieldId::MERCHANT_ACCOUNT, &merchant)?;

    enc.put_field(FieldId::CURRENCY, CURRENCY_VND)?;
    if let Some(amount) = amount {
        enc.put_uint(FieldId::AMOUNT, amount)?;
    }
    enc.put_field(FieldId::COUNTRY, COUNTRY_VN)?;

    if let Some(message) = &message {
        let mut additional = Encoder::new();
        additional.put_field(FieldId::PURPOSE, message)?;
        enc.put_nested(FieldId::ADDITIONAL_DATA, &additional)?;
    }

    Ok(enc.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vietqr_banks::Bank;

    #[test]
    fn test_put_field_rendering() {
        let mut enc = Encoder::new();
        enc.put_field(FieldId::PAYLOAD_FORMAT, "01").unwrap();
        enc.put_field(FieldId::CURRENCY, "704").unwrap();
        assert_eq!(enc.as_str(), "0002015303704");
    }

    #[test]
    fn test_put_field_too_long() {
        let mut enc = Encoder::new();
        let long = "a".repeat(100);
        let err = enc.put_field(FieldId::PURPOSE, &long).unwrap_err();
        assert_eq!(
            err,
            BuildError::ValueTooLong {
                id: FieldId::PURPOSE,
                length: 100
            }
        );
    }

    #[test]
    fn test_nested_length_is_rendered_length() {
        let mut child = Encoder::new();
        child.put_field(FieldId::ROUTING_ID, "970407").unwrap();
        let mut parent = Encoder::new();
        parent.put_nested(FieldId::BENEFICIARY, &child).unwrap();
        // child renders as "0006970407" (10 bytes), not the raw 6
        assert_eq!(parent.as_str(), "01100006970407");
    }

    #[test]
    fn test_static_payload_shape() {
        let transfer = QrTransfer::to_bin("970407", "9602091996");
        let payload = encode_transfer(&transfer).unwrap();
        assert!(payload.starts_with("00020101021138"));
        assert!(payload.contains("970407"));
        assert!(payload.contains("9602091996"));
        assert!(payload.contains("QRIBFTTA"));
        // static payload: currency, country, then the checksum directly --
        // no amount field and no additional data field between them
        assert!(payload.contains("53037045802VN6304"));
    }

    #[test]
    fn test_dynamic_payload_with_amount() {
        let transfer =
            QrTransfer::to_bin("970422", "0962091996").with_amount(Decimal::from(150_000));
        let payload = encode_transfer(&transfer).unwrap();
        assert!(payload.starts_with("00020101021238"));
        assert!(payload.contains("150000"));
        assert!(payload.contains("5406150000"));
    }

    #[test]
    fn test_catalog_bank_resolves_bin() {
        let transfer = QrTransfer::to_bank(Bank::Techcombank, "9602091996");
        let payload = encode_transfer(&transfer).unwrap();
        assert!(payload.contains("970407"));
    }

    #[test]
    fn test_message_is_normalized_before_embedding() {
        let transfer =
            QrTransfer::to_bank(Bank::MbBank, "0962091996").with_message("Chuyển  tiền");
        let payload = encode_transfer(&transfer).unwrap();
        // declared length covers the normalized bytes, not the original
        assert!(payload.contains("62150811Chuyen tien"));
        assert!(payload.starts_with("000201010212"));
    }

    #[test]
    fn test_zero_amount_is_omitted() {
        let transfer =
            QrTransfer::to_bank(Bank::MbBank, "0962091996").with_amount(Decimal::ZERO);
        let payload = encode_transfer(&transfer).unwrap();
        assert!(payload.starts_with("000201010211"));
    }

    #[test]
    fn test_fractional_amount_is_truncated() {
        let transfer = QrTransfer::to_bank(Bank::MbBank, "0962091996")
            .with_amount(Decimal::new(15_000_075, 2));
        let payload = encode_transfer(&transfer).unwrap();
        assert!(payload.contains("5406150000"));
    }

    #[test]
    fn test_checksum_trailer() {
        let transfer = QrTransfer::to_bank(Bank::Vietcombank, "12345678");
        let payload = encode_transfer(&transfer).unwrap();
        let (body, declared) = payload.split_at(payload.len() - 4);
        assert!(body.ends_with("6304"));
        let calculated = format_checksum(calculate_checksum(body.as_bytes()));
        assert_eq!(declared.as_bytes(), &calculated);
    }

    #[test]
    fn test_empty_account_rejected() {
        let transfer = QrTransfer::to_bank(Bank::Acb, "");
        assert_eq!(
            encode_transfer(&transfer).unwrap_err(),
            BuildError::EmptyAccountNumber
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let transfer =
            QrTransfer::to_bank(Bank::Acb, "123").with_amount(Decimal::from(-5));
        assert!(matches!(
            encode_transfer(&transfer).unwrap_err(),
            BuildError::NegativeAmount { .. }
        ));
    }

    #[test]
    fn test_beneficiary_must_be_unambiguous() {
        let mut transfer = QrTransfer::to_bank(Bank::Acb, "123");
        transfer.bin = Some("970416".to_string());
        assert_eq!(
            encode_transfer(&transfer).unwrap_err(),
            BuildError::AmbiguousBeneficiary
        );

        let mut transfer = QrTransfer::to_bin("970416", "123");
        transfer.bin = None;
        assert_eq!(
            encode_transfer(&transfer).unwrap_err(),
            BuildError::MissingBeneficiary
        );
    }

    #[test]
    fn test_bin_must_be_six_digits() {
        for bin in ["", "9704", "9704222", "97042a"] {
            let transfer = QrTransfer::to_bin(bin, "123");
            assert!(matches!(
                encode_transfer(&transfer).unwrap_err(),
                BuildError::InvalidBin { .. }
            ));
        }
    }
}
