//! Currency amounts.

/// Whole currency units. Signed because a failed payment pushes the
/// payer's balance below zero until the next purge.
pub type Money = i64;

/// Render an amount the way the console shows it, e.g. `$1500` or `-$20`.
#[must_use]
pub fn format_money(amount: Money) -> String {
    if amount < 0 {
        format!("-${}", amount.unsigned_abs())
    } else {
        format!("${amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1500), "$1500");
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(-20), "-$20");
    }
}
