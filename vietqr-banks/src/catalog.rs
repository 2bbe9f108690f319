/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The NAPAS 247 member bank catalog.
//!
//! Each member bank is identified on the wire by a 6-digit BIN (bank
//! identification number) carried in the beneficiary block of the merchant
//! account field. The catalog maps BINs to banks and banks to display names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A NAPAS 247 member bank.
///
/// This is a closed set compiled from the NAPAS member list. Payloads may
/// carry BINs outside this set; those parse fine and resolve to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    /// Ngân hàng TMCP Ngoại thương Việt Nam (970436).
    Vietcombank,
    /// Ngân hàng TMCP Công thương Việt Nam (970415).
    Vietinbank,
    /// Ngân hàng TMCP Đầu tư và Phát triển Việt Nam (970418).
    Bidv,
    /// Ngân hàng Nông nghiệp và Phát triển Nông thôn Việt Nam (970405).
    Agribank,
    /// Ngân hàng TMCP Kỹ thương Việt Nam (970407).
    Techcombank,
    /// Ngân hàng TMCP Quân đội (970422).
    MbBank,
    /// Ngân hàng TMCP Á Châu (970416).
    Acb,
    /// Ngân hàng TMCP Việt Nam Thịnh Vượng (970432).
    VpBank,
    /// Ngân hàng TMCP Tiên Phong (970423).
    TpBank,
    /// Ngân hàng TMCP Sài Gòn Thương Tín (970403).
    Sacombank,
    /// Ngân hàng TMCP Quốc tế Việt Nam (970441).
    Vib,
    /// Ngân hàng TMCP Sài Gòn - Hà Nội (970443).
    Shb,
    /// Ngân hàng TMCP Phương Đông (970448).
    Ocb,
    /// Ngân hàng TMCP Hàng Hải (970426).
    Msb,
    /// Ngân hàng TMCP Đông Nam Á (970440).
    SeaBank,
    /// Ngân hàng TMCP Phát triển TP.HCM (970437).
    HdBank,
    /// Ngân hàng TMCP Xuất Nhập khẩu Việt Nam (970431).
    Eximbank,
    /// Ngân hàng TMCP Bưu điện Liên Việt (970449).
    LienVietPostBank,
    /// Ngân hàng TMCP An Bình (970425).
    AbBank,
    /// Ngân hàng TMCP Bắc Á (970409).
    BacABank,
    /// Ngân hàng TMCP Việt Á (970427).
    VietABank,
    /// Ngân hàng TMCP Nam Á (970428).
    NamABank,
    /// Ngân hàng TMCP Xăng dầu Petrolimex (970430).
    PgBank,
    /// Ngân hàng TMCP Đông Á (970406).
    DongABank,
    /// Ngân hàng TMCP Sài Gòn (970429).
    Scb,
    /// Ngân hàng TMCP Quốc dân (970419).
    Ncb,
    /// Ngân hàng TMCP Kiên Long (970452).
    KienLongBank,
    /// Ngân hàng TMCP Bản Việt (970454).
    VietCapitalBank,
    /// Ngân hàng TMCP Sài Gòn Công Thương (970400).
    SaigonBank,
    /// Ngân hàng TMCP Bảo Việt (970438).
    BaoVietBank,
    /// Ngân hàng TMCP Việt Nam Thương Tín (970433).
    VietBank,
    /// Ngân hàng TNHH MTV Shinhan Việt Nam (970424).
    ShinhanBank,
    /// Ngân hàng TNHH MTV Public Việt Nam (970439).
    PublicBank,
}

impl Bank {
    /// Returns the 6-digit NAPAS BIN for this bank.
    #[must_use]
    pub const fn bin(&self) -> &'static str {
        match self {
            Self::Vietcombank => "970436",
            Self::Vietinbank => "970415",
            Self::Bidv => "970418",
            Self::Agribank => "970405",
            Self::Techcombank => "970407",
            Self::MbBank => "970422",
            Self::Acb => "970416",
            Self::VpBank => "970432",
            Self::TpBank => "970423",
            Self::Sacombank => "970403",
            Self::Vib => "970441",
            Self::Shb => "970443",
            Self::Ocb => "970448",
            Self::Msb => "970426",
            Self::SeaBank => "970440",
            Self::HdBank => "970437",
            Self::Eximbank => "970431",
            Self::LienVietPostBank => "970449",
            Self::AbBank => "970425",
            Self::BacABank => "970409",
            Self::VietABank => "970427",
            Self::NamABank => "970428",
            Self::PgBank => "970430",
            Self::DongABank => "970406",
            Self::Scb => "970429",
            Self::Ncb => "970419",
            Self::KienLongBank => "970452",
            Self::VietCapitalBank => "970454",
            Self::SaigonBank => "970400",
            Self::BaoVietBank => "970438",
            Self::VietBank => "970433",
            Self::ShinhanBank => "970424",
            Self::PublicBank => "970439",
        }
    }

    /// Returns the short trading name for this bank.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Vietcombank => "Vietcombank",
            Self::Vietinbank => "VietinBank",
            Self::Bidv => "BIDV",
            Self::Agribank => "Agribank",
            Self::Techcombank => "Techcombank",
            Self::MbBank => "MB Bank",
            Self::Acb => "ACB",
            Self::VpBank => "VPBank",
            Self::TpBank => "TPBank",
            Self::Sacombank => "Sacombank",
            Self::Vib => "VIB",
            Self::Shb => "SHB",
            Self::Ocb => "OCB",
            Self::Msb => "MSB",
            Self::SeaBank => "SeABank",
            Self::HdBank => "HDBank",
            Self::Eximbank => "Eximbank",
            Self::LienVietPostBank => "LienVietPostBank",
            Self::AbBank => "ABBank",
            Self::BacABank => "Bac A Bank",
            Self::VietABank => "VietABank",
            Self::NamABank => "Nam A Bank",
            Self::PgBank => "PG Bank",
            Self::DongABank => "DongA Bank",
            Self::Scb => "SCB",
            Self::Ncb => "NCB",
            Self::KienLongBank => "KienlongBank",
            Self::VietCapitalBank => "Viet Capital Bank",
            Self::SaigonBank => "SaigonBank",
            Self::BaoVietBank => "BaoViet Bank",
            Self::VietBank => "VietBank",
            Self::ShinhanBank => "Shinhan Bank",
            Self::PublicBank => "Public Bank Vietnam",
        }
    }

    /// Returns the full registered name for this bank.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vietcombank => "Ngan hang TMCP Ngoai thuong Viet Nam",
            Self::Vietinbank => "Ngan hang TMCP Cong thuong Viet Nam",
            Self::Bidv => "Ngan hang TMCP Dau tu va Phat trien Viet Nam",
            Self::Agribank => "Ngan hang Nong nghiep va Phat trien Nong thon Viet Nam",
            Self::Techcombank => "Ngan hang TMCP Ky thuong Viet Nam",
            Self::MbBank => "Ngan hang TMCP Quan doi",
            Self::Acb => "Ngan hang TMCP A Chau",
            Self::VpBank => "Ngan hang TMCP Viet Nam Thinh Vuong",
            Self::TpBank => "Ngan hang TMCP Tien Phong",
            Self::Sacombank => "Ngan hang TMCP Sai Gon Thuong Tin",
            Self::Vib => "Ngan hang TMCP Quoc te Viet Nam",
            Self::Shb => "Ngan hang TMCP Sai Gon - Ha Noi",
            Self::Ocb => "Ngan hang TMCP Phuong Dong",
            Self::Msb => "Ngan hang TMCP Hang Hai",
            Self::SeaBank => "Ngan hang TMCP Dong Nam A",
            Self::HdBank => "Ngan hang TMCP Phat trien TP.HCM",
            Self::Eximbank => "Ngan hang TMCP Xuat Nhap khau Viet Nam",
            Self::LienVietPostBank => "Ngan hang TMCP Buu dien Lien Viet",
            Self::AbBank => "Ngan hang TMCP An Binh",
            Self::BacABank => "Ngan hang TMCP Bac A",
            Self::VietABank => "Ngan hang TMCP Viet A",
            Self::NamABank => "Ngan hang TMCP Nam A",
            Self::PgBank => "Ngan hang TMCP Xang dau Petrolimex",
            Self::DongABank => "Ngan hang TMCP Dong A",
            Self::Scb => "Ngan hang TMCP Sai Gon",
            Self::Ncb => "Ngan hang TMCP Quoc dan",
            Self::KienLongBank => "Ngan hang TMCP Kien Long",
            Self::VietCapitalBank => "Ngan hang TMCP Ban Viet",
            Self::SaigonBank => "Ngan hang TMCP Sai Gon Cong Thuong",
            Self::BaoVietBank => "Ngan hang TMCP Bao Viet",
            Self::VietBank => "Ngan hang TMCP Viet Nam Thuong Tin",
            Self::ShinhanBank => "Ngan hang TNHH MTV Shinhan Viet Nam",
            Self::PublicBank => "Ngan hang TNHH MTV Public Viet Nam",
        }
    }

    /// Resolves a 6-digit BIN to a catalog bank.
    ///
    /// # Arguments
    /// * `bin` - The BIN string as carried in the beneficiary block
    ///
    /// # Returns
    /// The matching bank, or `None` if the BIN is not in the catalog.
    #[must_use]
    pub fn from_bin(bin: &str) -> Option<Self> {
        ALL_BANKS.iter().copied().find(|b| b.bin() == bin)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Every bank in the catalog, in declaration order.
pub const ALL_BANKS: &[Bank] = &[
    Bank::Vietcombank,
    Bank::Vietinbank,
    Bank::Bidv,
    Bank::Agribank,
    Bank::Techcombank,
    Bank::MbBank,
    Bank::Acb,
    Bank::VpBank,
    Bank::TpBank,
    Bank::Sacombank,
    Bank::Vib,
    Bank::Shb,
    Bank::Ocb,
    Bank::Msb,
    Bank::SeaBank,
    Bank::HdBank,
    Bank::Eximbank,
    Bank::LienVietPostBank,
    Bank::AbBank,
    Bank::BacABank,
    Bank::VietABank,
    Bank::NamABank,
    Bank::PgBank,
    Bank::DongABank,
    Bank::Scb,
    Bank::Ncb,
    Bank::KienLongBank,
    Bank::VietCapitalBank,
    Bank::SaigonBank,
    Bank::BaoVietBank,
    Bank::VietBank,
    Bank::ShinhanBank,
    Bank::PublicBank,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_lookup() {
        assert_eq!(Bank::from_bin("970436"), Some(Bank::Vietcombank));
        assert_eq!(Bank::from_bin("970407"), Some(Bank::Techcombank));
        assert_eq!(Bank::from_bin("970422"), Some(Bank::MbBank));
    }

    #[test]
    fn test_unknown_bin() {
        assert_eq!(Bank::from_bin("999999"), None);
        assert_eq!(Bank::from_bin(""), None);
        assert_eq!(Bank::from_bin("97040"), None);
    }

    #[test]
    fn test_bins_are_six_digits() {
        for bank in ALL_BANKS {
            let bin = bank.bin();
            assert_eq!(bin.len(), 6, "{bank} has a malformed BIN");
            assert!(bin.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_bins_are_unique() {
        for (i, a) in ALL_BANKS.iter().enumerate() {
            for b in &ALL_BANKS[i + 1..] {
                assert_ne!(a.bin(), b.bin(), "{a} and {b} share a BIN");
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        for bank in ALL_BANKS {
            assert_eq!(Bank::from_bin(bank.bin()), Some(*bank));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Bank::Bidv.to_string(), "BIDV");
        assert_eq!(Bank::MbBank.to_string(), "MB Bank");
    }
}
