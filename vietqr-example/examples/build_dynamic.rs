//! Builds a dynamic QR payload with a pre-filled amount and message.

use rust_decimal::Decimal;
use tracing::info;
use vietqr_banks::Bank;
use vietqr_core::QrTransfer;
use vietqr_tagvalue::encode_transfer;

mod common;
use common::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let transfer = QrTransfer::to_bank(Bank::MbBank, "0962091996")
        .with_amount(Decimal::from(150_000u32))
        .with_message("Chuyển tiền nhà tháng 8");
    let payload = encode_transfer(&transfer)?;

    info!("dynamic: {}", transfer.is_dynamic());
    info!("payload: {payload}");
    println!("{payload}");
    Ok(())
}
