//! Fixed-annuity payment (PMT) solver and present-value helper

/// Days in the canonical installment period.
const PERIOD_DAYS: f64 = 30.0;

/// Periodic payment for a fixed annuity.
///
/// `payment = P * r / (1 - (1 + r)^-n)` with `r = monthly_rate_pct / 100`.
/// The absolute value is taken to defend against sign artifacts at
/// degenerate rates.
///
/// Preconditions: `installments > 0` and `monthly_rate_pct != -100`. Neither
/// is checked; violating them divides by zero and the non-finite result
/// propagates to the caller.
pub fn pmt(principal: f64, monthly_rate_pct: f64, installments: u32) -> f64 {
    let r = monthly_rate_pct / 100.0;
    (principal * r / (1.0 - (1.0 + r).powi(-(installments as i32)))).abs()
}

/// Periodic payment adjusted for a first period shorter or longer than 30 days.
///
/// Scales the base payment by `(1 + r)^((days_to_first - 30) / 30)`, so at
/// exactly 30 days this equals [`pmt`].
pub fn pmt_adjusted(
    principal: f64,
    monthly_rate_pct: f64,
    installments: u32,
    days_to_first: i64,
) -> f64 {
    let r = monthly_rate_pct / 100.0;
    let base = pmt(principal, monthly_rate_pct, installments);
    (base * (1.0 + r).powf((days_to_first as f64 - PERIOD_DAYS) / PERIOD_DAYS)).abs()
}

/// Present value of a payment due `days` from now, discounted at an annual rate.
///
/// The annual rate (a decimal, e.g. 0.35 for 35%) is converted to a daily
/// compounding rate via `(1 + annual)^(1/365) - 1`.
pub fn present_value(payment: f64, annual_rate: f64, days: i64) -> f64 {
    let daily_rate = (1.0 + annual_rate).powf(1.0 / 365.0) - 1.0;
    payment / (1.0 + daily_rate).powf(days as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmt_standard_annuity() {
        // 1000 at 2% monthly over 12 installments: classic table value
        let payment = pmt(1000.0, 2.0, 12);
        assert_relative_eq!(payment, 94.5596, epsilon = 1e-3);
    }

    #[test]
    fn test_pmt_single_installment() {
        // One installment repays principal plus one period of interest
        let payment = pmt(1000.0, 2.0, 1);
        assert_relative_eq!(payment, 1020.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pmt_adjusted_matches_pmt_at_30_days() {
        let base = pmt(5000.0, 2.5, 24);
        let adjusted = pmt_adjusted(5000.0, 2.5, 24, 30);
        assert_relative_eq!(adjusted, base, epsilon = 1e-12);
    }

    #[test]
    fn test_pmt_adjusted_scales_with_first_period() {
        // A longer first period accrues more interest; a shorter one, less
        let base = pmt(5000.0, 2.5, 24);
        assert!(pmt_adjusted(5000.0, 2.5, 24, 45) > base);
        assert!(pmt_adjusted(5000.0, 2.5, 24, 15) < base);
    }

    #[test]
    fn test_present_value_discounts() {
        let pv = present_value(100.0, 0.35, 365);
        // One full year at 35% annual: 100 / 1.35
        assert_relative_eq!(pv, 100.0 / 1.35, epsilon = 1e-9);
        // Zero days elapsed: no discount
        assert_relative_eq!(present_value(100.0, 0.35, 0), 100.0, epsilon = 1e-12);
    }
}
