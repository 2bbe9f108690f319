/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Zero-copy payload decoder.
//!
//! This module walks an untrusted payload string back into structured fields
//! without copying: field values are returned as slices of the original
//! input. The same cursor walk is used at every nesting level (top level,
//! merchant account block, beneficiary sub-block, additional data block),
//! with different post-processing of the extracted sub-fields.

use crate::checksum::{calculate_checksum, format_checksum};
use smallvec::SmallVec;
use vietqr_banks::Bank;
use vietqr_core::error::ParseError;
use vietqr_core::field::{FieldId, FieldRef};
use vietqr_core::transfer::ParsedQr;
use vietqr_core::types::{CURRENCY_VND, COUNTRY_VN, InitiationMethod, PAYLOAD_FORMAT_VALUE};

/// Minimum payload length: the checksum-field footprint `6304XXXX`.
pub const MIN_PAYLOAD_LEN: usize = 8;

/// Zero-copy TLV record decoder.
///
/// Maintains a cursor over the input and yields one `id + length + value`
/// record per [`next_field`](Self::next_field) call. Re-instantiated over a
/// nested field's value to walk its sub-records.
#[derive(Debug)]
pub struct Decoder<'a> {
    /// Input string.
    input: &'a str,
    /// Current byte position in the input.
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder for the given input.
    ///
    /// # Arguments
    /// * `input` - The payload (or nested field value) to walk
    #[inline]
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Parses the next record from the input.
    ///
    /// # Returns
    /// The next field, or `None` when the input is exactly consumed.
    ///
    /// # Errors
    /// Returns `ParseError` when leftover bytes are too short for a header,
    /// the identifier or length marker is not 2 ASCII digits, or the declared
    /// length reads past the end of the input.
    pub fn next_field(&mut self) -> Result<Option<FieldRef<'a>>, ParseError> {
        let bytes = self.input.as_bytes();
        let remaining = bytes.len() - self.offset;
        if remaining == 0 {
            return Ok(None);
        }
        if remaining < 4 {
            return Err(ParseError::TrailingData {
                offset: self.offset,
            });
        }

        let id = FieldId::from_digits([bytes[self.offset], bytes[self.offset + 1]]).ok_or(
            ParseError::InvalidFieldId {
                offset: self.offset,
            },
        )?;

        let (l0, l1) = (bytes[self.offset + 2], bytes[self.offset + 3]);
        if !l0.is_ascii_digit() || !l1.is_ascii_digit() {
            return Err(ParseError::InvalidLengthMarker {
                id,
                raw: self
                    .input
                    .get(self.offset + 2..self.offset + 4)
                    .unwrap_or("")
                    .to_string(),
            });
        }
        let declared = ((l0 - b'0') * 10 + (l1 - b'0')) as usize;

        let start = self.offset + 4;
        let end = start + declared;
        // `get` also rejects a declared length that splits a UTF-8 character
        let value = (end <= bytes.len())
            .then(|| self.input.get(start..end))
            .flatten()
            .ok_or(ParseError::ValueOutOfBounds {
                id,
                declared,
                remaining: bytes.len() - start,
            })?;

        self.offset = end;
        Ok(Some(FieldRef::new(id, value)))
    }

    /// Returns the current offset in the input.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the unconsumed remainder of the input.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Returns true if the input has been fully consumed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Resets the decoder to the beginning of the input.
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Walks an input completely, collecting every record.
///
/// Used at all nesting levels. Any leftover bytes that do not form a full
/// record are a hard error, never silently discarded.
fn walk(input: &str) -> Result<SmallVec<[FieldRef<'_>; 8]>, ParseError> {
    let mut decoder = Decoder::new(input);
    let mut fields = SmallVec::new();
    while let Some(field) = decoder.next_field()? {
        fields.push(field);
    }
    Ok(fields)
}

/// Looks up a field by id; on duplicates the last occurrence wins.
///
/// Duplicate ids within one nesting level are deliberately permitted.
/// Unknown ids sit in the list untouched, forward-compatible with
/// unspecified fields.
fn find<'a>(fields: &[FieldRef<'a>], id: FieldId) -> Option<&'a str> {
    fields.iter().rev().find(|f| f.id == id).map(|f| f.value)
}

fn require<'a>(fields: &[FieldRef<'a>], id: FieldId) -> Result<&'a str, ParseError> {
    find(fields, id).ok_or(ParseError::MissingRequiredField { id })
}

fn expect_literal<'a>(
    fields: &[FieldRef<'a>],
    id: FieldId,
    expected: &'static str,
) -> Result<&'a str, ParseError> {
    let actual = require(fields, id)?;
    if actual == expected {
        Ok(actual)
    } else {
        Err(ParseError::UnexpectedFieldValue {
            id,
            expected,
            actual: actual.to_string(),
        })
    }
}

fn parse_amount(raw: &str) -> Result<u64, ParseError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidAmount {
            raw: raw.to_string(),
        });
    }
    raw.parse().map_err(|_| ParseError::InvalidAmount {
        raw: raw.to_string(),
    })
}

/// Decodes a complete payload string into a [`ParsedQr`].
///
/// The top level is walked into a flat field list, the checksum record is
/// verified, the fixed literals are validated, and the two nested fields
/// (merchant account 38, additional data 62) are re-walked with the same
/// record primitive. A BIN outside the bank catalog is not an error; the
/// resolved bank is simply absent.
///
/// # Arguments
/// * `payload` - The untrusted payload string
///
/// # Errors
/// Returns `ParseError` on any structural or semantic violation; the result
/// is never partially constructed.
pub fn decode_transfer(payload: &str) -> Result<ParsedQr, ParseError> {
    if payload.is_empty() {
        return Err(ParseError::Empty);
    }
    if payload.len() < MIN_PAYLOAD_LEN {
        return Err(ParseError::TooShort {
            length: payload.len(),
        });
    }

    let fields = walk(payload)?;

    // the checksum record must be the final record and end exactly at the
    // end of the payload
    let checksum = fields
        .last()
        .copied()
        .filter(|f| f.id == FieldId::CHECKSUM)
        .ok_or(ParseError::MissingChecksumField)?;
    if checksum.len() != 4 {
        return Err(ParseError::InvalidChecksumLength {
            raw: checksum.value.to_string(),
        });
    }

    let calculated = format_checksum(calculate_checksum(
        &payload.as_bytes()[..payload.len() - 4],
    ));
    if checksum.value.as_bytes() != calculated {
        return Err(ParseError::ChecksumMismatch {
            calculated: calculated.iter().map(|&b| b as char).collect(),
            declared: checksum.value.to_string(),
        });
    }

    let payload_format =
        expect_literal(&fields, FieldId::PAYLOAD_FORMAT, PAYLOAD_FORMAT_VALUE)?;
    let initiation_raw = require(&fields, FieldId::INITIATION_METHOD)?;
    let initiation: InitiationMethod =
        initiation_raw
            .parse()
            .map_err(|_| ParseError::UnexpectedFieldValue {
                id: FieldId::INITIATION_METHOD,
                expected: "11 or 12",
                actual: initiation_raw.to_string(),
            })?;
    let currency = expect_literal(&fields, FieldId::CURRENCY, CURRENCY_VND)?;
    let country = expect_literal(&fields, FieldId::COUNTRY, COUNTRY_VN)?;

    let merchant = walk(require(&fields, FieldId::MERCHANT_ACCOUNT)?)?;
    let service_code = find(&merchant, FieldId::SERVICE_CODE).map(str::to_string);
    let beneficiary = walk(find(&merchant, FieldId::BENEFICIARY).ok_or(
        ParseError::MissingMerchantField {
            id: FieldId::BENEFICIARY,
        },
    )?)?;

    let bin = find(&beneficiary, FieldId::ROUTING_ID).ok_or(
        ParseError::MissingMerchantField {
            id: FieldId::ROUTING_ID,
        },
    )?;
    if bin.len() != 6 || !bin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidRoutingId {
            raw: bin.to_string(),
        });
    }
    let account = find(&beneficiary, FieldId::ACCOUNT_NUMBER).ok_or(
        ParseError::MissingMerchantField {
            id: FieldId::ACCOUNT_NUMBER,
        },
    )?;
    if account.is_empty() {
        return Err(ParseError::EmptyAccountNumber);
    }

    let amount = find(&fields, FieldId::AMOUNT)
        .map(parse_amount)
        .transpose()?;

    let message = match find(&fields, FieldId::ADDITIONAL_DATA) {
        Some(raw) => find(&walk(raw)?, FieldId::PURPOSE).map(str::to_string),
        None => None,
    };

    Ok(ParsedQr {
        bank: Bank::from_bin(bin),
        bin: bin.to_string(),
        account: account.to_string(),
        amount,
        message,
        payload_format: payload_format.to_string(),
        initiation,
        currency: currency.to_string(),
        country: country.to_string(),
        service_code,
        checksum: checksum.value.to_string(),
    })
}
