/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # VietQR Core
//!
//! Core types, traits, and error definitions for the VietQR payload codec.
//!
//! This crate provides the fundamental building blocks used across all VietQR crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `FieldId` and the zero-copy `FieldRef`
//! - **Schema types**: `InitiationMethod`, `ServiceCode`, and the fixed schema literals
//! - **Transfer types**: `QrTransfer` (what to encode) and `ParsedQr` (what was decoded)
//! - **Text normalization**: Vietnamese-to-ASCII folding for free-text fields
//!
//! ## Purity
//!
//! Nothing in this crate performs I/O or holds shared state. Every operation
//! is a pure function of its inputs and is safe to call from any thread.

pub mod error;
pub mod field;
pub mod text;
pub mod transfer;
pub mod types;

pub use error::{BuildError, ParseError, QrError, Result};
pub use field::{FieldId, FieldRef};
pub use text::normalize;
pub use transfer::{ParsedQr, QrTransfer};
pub use types::{InitiationMethod, ServiceCode, UnknownLiteral};
