//! Builds a static QR payload: the payer fills in amount and message.

use tracing::info;
use vietqr_banks::Bank;
use vietqr_core::QrTransfer;
use vietqr_tagvalue::encode_transfer;

mod common;
use common::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let transfer = QrTransfer::to_bank(Bank::Techcombank, "9602091996");
    let payload = encode_transfer(&transfer)?;

    info!("bank: {}", Bank::Techcombank);
    info!("payload: {payload}");
    println!("{payload}");
    Ok(())
}
