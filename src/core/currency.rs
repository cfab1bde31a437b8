use crate::utils::error::{CourseError, Result};
use crate::utils::validation::parse_non_negative_decimal;
use std::fmt;

/// Denominations in cents, largest first.
pub const DENOMINATIONS: [u64; 5] = [100, 25, 10, 5, 1];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinBreakdown {
    pub amount: f64,
    pub dollars: u64,
    pub quarters: u64,
    pub dimes: u64,
    pub nickels: u64,
    pub pennies: u64,
}

impl CoinBreakdown {
    pub fn total_cents(&self) -> u64 {
        self.dollars * 100 + self.quarters * 25 + self.dimes * 10 + self.nickels * 5 + self.pennies
    }
}

impl fmt::Display for CoinBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your amount {:?} consists of:", self.amount)?;
        writeln!(f, "{} dollars", self.dollars)?;
        writeln!(f, "{} quarters", self.quarters)?;
        writeln!(f, "{} dimes", self.dimes)?;
        writeln!(f, "{} nickels", self.nickels)?;
        write!(f, "{} pennies", self.pennies)
    }
}

/// Rounds to the nearest cent, halves going up.
pub fn to_cents(amount: f64) -> Result<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CourseError::invalid_input(
            "amount",
            &amount.to_string(),
            "amount must be a finite, non-negative number",
        ));
    }

    whole_cents(amount, (amount * 100.0).round())
}

// `u64::MAX as f64` rounds up to 2^64, which is already out of range.
fn whole_cents(amount: f64, cents: f64) -> Result<u64> {
    if cents >= u64::MAX as f64 {
        return Err(CourseError::invalid_input(
            "amount",
            &amount.to_string(),
            "amount is too large",
        ));
    }
    Ok(cents as u64)
}

pub fn convert_currency(amount: f64) -> Result<CoinBreakdown> {
    let mut remaining = to_cents(amount)?;
    let mut counts = [0u64; DENOMINATIONS.len()];

    for (count, value) in counts.iter_mut().zip(DENOMINATIONS) {
        *count = remaining / value;
        remaining %= value;
    }

    let [dollars, quarters, dimes, nickels, pennies] = counts;
    Ok(CoinBreakdown {
        amount,
        dollars,
        quarters,
        dimes,
        nickels,
        pennies,
    })
}

/// Screen handler: parses the entered text and renders the breakdown.
pub fn render_currency(input: &str) -> String {
    match parse_non_negative_decimal("amount", input).and_then(convert_currency) {
        Ok(breakdown) => breakdown.to_string(),
        Err(e) => {
            tracing::debug!("Rejected currency input: {}", e);
            "Invalid input".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_example_amount() {
        let breakdown = convert_currency(11.56).unwrap();
        assert_eq!(breakdown.dollars, 11);
        assert_eq!(breakdown.quarters, 2);
        assert_eq!(breakdown.dimes, 0);
        assert_eq!(breakdown.nickels, 1);
        assert_eq!(breakdown.pennies, 1);
    }

    #[test]
    fn test_total_matches_rounded_cents() {
        let amounts = [0.0, 0.01, 0.04, 0.05, 0.1, 0.29, 0.99, 1.0, 7.77, 19.994, 19.995, 123.45];
        for amount in amounts {
            let breakdown = convert_currency(amount).unwrap();
            assert_eq!(
                breakdown.total_cents(),
                (amount * 100.0).round() as u64,
                "amount {}",
                amount
            );
            assert!(breakdown.quarters < 4);
            assert!(breakdown.dimes < 3);
            assert!(breakdown.nickels < 2);
            assert!(breakdown.pennies < 5);
        }
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(convert_currency(-0.01).is_err());
        assert!(convert_currency(f64::NAN).is_err());
        assert!(convert_currency(f64::INFINITY).is_err());
    }

    #[test]
    fn test_cents_at_u64_limit_are_rejected() {
        let limit = 18_446_744_073_709_551_616.0_f64;
        assert_eq!(limit, u64::MAX as f64);
        assert!(whole_cents(limit / 100.0, limit).is_err());
        assert!(whole_cents(limit / 100.0, limit * 2.0).is_err());
        assert_eq!(whole_cents(1.0, 9_007_199_254_740_992.0).unwrap(), 9_007_199_254_740_992);
        assert!(convert_currency(1.0e18).is_err());
    }

    #[test]
    fn test_render_messages() {
        let text = render_currency("11.56");
        assert!(text.starts_with("Your amount 11.56 consists of:"));
        assert!(text.contains("11 dollars"));
        assert!(text.ends_with("1 pennies"));
        assert_eq!(render_currency("eleven"), "Invalid input");
        assert!(render_currency("5").starts_with("Your amount 5.0 consists of:\n5 dollars"));
    }
}
