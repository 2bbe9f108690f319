/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # VietQR Banks
//!
//! Static NAPAS member bank catalog for the VietQR payload codec.
//!
//! This crate provides:
//! - **Bank catalog**: A closed set of NAPAS 247 member banks
//! - **BIN lookup**: Resolution from 6-digit BIN to bank and back
//!
//! Unknown BINs are never an error: QR payloads may reference institutions
//! that joined the network after this table was compiled, so lookups return
//! `Option` and callers fall back to the raw BIN.

pub mod catalog;

pub use catalog::Bank;
