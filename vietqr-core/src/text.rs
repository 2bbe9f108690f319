/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! ASCII normalization for free-text payload fields.
//!
//! Transaction purpose text is embedded in field 62 with its byte length
//! declared up front, so the encoder needs a predictable ASCII rendering of
//! whatever the caller typed. [`normalize`] folds Vietnamese diacritics to
//! their base letters, drops every character that is not ASCII alphanumeric
//! or space, collapses whitespace runs, and trims both ends. The function is
//! idempotent.

/// Folds a Vietnamese accented character to its ASCII base letter.
///
/// Characters outside the Vietnamese alphabet are returned unchanged.
const fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ'
        | 'ẩ' | 'ẫ' | 'ậ' => 'a',
        'À' | 'Á' | 'Ả' | 'Ã' | 'Ạ' | 'Ă' | 'Ằ' | 'Ắ' | 'Ẳ' | 'Ẵ' | 'Ặ' | 'Â' | 'Ầ' | 'Ấ'
        | 'Ẩ' | 'Ẫ' | 'Ậ' => 'A',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'È' | 'É' | 'Ẻ' | 'Ẽ' | 'Ẹ' | 'Ê' | 'Ề' | 'Ế' | 'Ể' | 'Ễ' | 'Ệ' => 'E',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'Ì' | 'Í' | 'Ỉ' | 'Ĩ' | 'Ị' => 'I',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ'
        | 'ở' | 'ỡ' | 'ợ' => 'o',
        'Ò' | 'Ó' | 'Ỏ' | 'Õ' | 'Ọ' | 'Ô' | 'Ồ' | 'Ố' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ơ' | 'Ờ' | 'Ớ'
        | 'Ở' | 'Ỡ' | 'Ợ' => 'O',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'Ù' | 'Ú' | 'Ủ' | 'Ũ' | 'Ụ' | 'Ư' | 'Ừ' | 'Ứ' | 'Ử' | 'Ữ' | 'Ự' => 'U',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'Ỳ' | 'Ý' | 'Ỷ' | 'Ỹ' | 'Ỵ' => 'Y',
        'đ' => 'd',
        'Đ' => 'D',
        _ => c,
    }
}

/// Normalizes free text to the ASCII-safe subset embeddable in a payload.
///
/// Keeps ASCII letters, digits, and single spaces between words; everything
/// else is folded or dropped.
///
/// # Arguments
/// * `input` - Arbitrary caller-supplied text
///
/// # Example
/// ```
/// use vietqr_core::text::normalize;
///
/// assert_eq!(normalize("Chuyển  tiền nhà!"), "Chuyen tien nha");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars() {
        let c = fold_char(c);
        if c.is_whitespace() {
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if !c.is_ascii_alphanumeric() {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_vietnamese() {
        assert_eq!(normalize("Nguyễn Văn Đức"), "Nguyen Van Duc");
        assert_eq!(normalize("tiền điện tháng 3"), "tien dien thang 3");
        assert_eq!(normalize("TRẢ NỢ"), "TRA NO");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("hello, world!"), "hello world");
        assert_eq!(normalize("a+b=c"), "abc");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a   b  \t c  "), "a b c");
        assert_eq!(normalize("\n\n"), "");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Chuyển khoản  #42");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(normalize("Payment 150000 VND"), "Payment 150000 VND");
    }
}
