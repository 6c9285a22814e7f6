//! Currency display helpers

pub const CURRENCY: &str = "LAK";

/// Group digits in thousands: 1234567 -> "1,234,567"
pub fn with_separators(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// "50,000,000 LAK"
pub fn amount(value: u64) -> String {
    signed_amount(value as i64)
}

pub fn signed_amount(value: i64) -> String {
    format!("{} {}", with_separators(value), CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_separators() {
        assert_eq!(with_separators(0), "0");
        assert_eq!(with_separators(999), "999");
        assert_eq!(with_separators(1_000), "1,000");
        assert_eq!(with_separators(50_000_000), "50,000,000");
        assert_eq!(with_separators(-13_450_000), "-13,450,000");
    }

    #[test]
    fn test_amount_suffix() {
        assert_eq!(amount(750_000), "750,000 LAK");
        assert_eq!(signed_amount(-5), "-5 LAK");
    }
}
