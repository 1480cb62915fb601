//! Rupiah formatting for the `id-ID` locale
//!
//! Amounts are whole rupiah: no decimal places, `.` as the thousands
//! separator.

/// Group digits in threes with `.` (`15000` -> `15.000`)
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}

/// Render an amount the way prices appear in the page and the message (`Rp 15.000`)
pub fn format_rupiah(amount: u64) -> String {
    format!("Rp {}", group_thousands(amount))
}

/// Render an amount with the ISO code, as on the buy button (`IDR 15.000`)
pub fn format_idr(amount: u64) -> String {
    format!("IDR {}", group_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(15000), "15.000");
        assert_eq!(group_thousands(100000), "100.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(format_rupiah(15000), "Rp 15.000");
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_idr(5000), "IDR 5.000");
    }
}
