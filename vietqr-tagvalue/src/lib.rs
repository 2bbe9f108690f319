/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # VietQR Tag-Value
//!
//! Nested TLV encoding and decoding for NAPAS 247 (EMVCo merchant-presented)
//! bank-transfer QR payloads.
//!
//! This crate provides parsing and serialization of the flat payload string a
//! QR image carries, using `id(2 digits) + length(2 digits) + value` records
//! with TLV-within-TLV nesting for the merchant account and additional data
//! fields.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Field values reference the original payload string
//! - **Checksum guarding**: CRC-16/CCITT-FALSE computed and verified
//! - **All-or-nothing decoding**: A [`ParsedQr`] is only ever fully constructed

pub mod checksum;
pub mod decoder;
pub mod encoder;

pub use checksum::calculate_checksum;
pub use decoder::{Decoder, decode_transfer};
pub use encoder::{Encoder, encode_transfer};
pub use vietqr_core::transfer::{ParsedQr, QrTransfer};
