//! Parses a payload string (first CLI argument, or a built-in sample) and
//! prints the decoded transfer.

use tracing::{info, warn};
use vietqr_banks::Bank;
use vietqr_core::QrTransfer;
use vietqr_tagvalue::{decode_transfer, encode_transfer};

mod common;
use common::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let payload = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            warn!("no payload argument given, using a built-in sample");
            encode_transfer(&QrTransfer::to_bank(Bank::Vietcombank, "0011002345678"))?
        }
    };

    let qr = decode_transfer(&payload)?;
    info!("bank: {}", qr.bank_name());
    info!("account: {}", qr.account);
    info!("amount: {} VND", qr.amount_display());
    info!("dynamic: {}", qr.is_dynamic());
    if let Some(message) = &qr.message {
        info!("message: {message}");
    }
    println!("{qr}");
    Ok(())
}
