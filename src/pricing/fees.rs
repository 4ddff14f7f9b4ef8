//! Origination fee (TAC) and transaction tax (IOF) calculators
//!
//! All rates are supplied as percentages (e.g. 0.38 for 0.38%), matching the
//! contract tables they come from.

/// Regulatory cap on the number of days the daily IOF component accrues.
pub const MAX_IOF_DAYS: i64 = 365;

/// Origination fee (TAC): percentage of the principal, capped.
///
/// Returns the smaller of `principal * fee_rate_pct / 100` and `cap`,
/// never negative.
pub fn origination_fee(principal: f64, fee_rate_pct: f64, cap: f64) -> f64 {
    (principal * fee_rate_pct / 100.0).min(cap).max(0.0)
}

/// Fixed IOF component: flat percentage of the financed amount.
pub fn fixed_iof(amount: f64, annual_rate_pct: f64) -> f64 {
    amount * annual_rate_pct / 100.0
}

/// Daily IOF component on a single discounted repayment.
///
/// The day count is clamped to [`MAX_IOF_DAYS`] before multiplying; the cap
/// applies to the accrual window, not to the resulting amount.
pub fn daily_iof(present_value: f64, daily_rate_pct: f64, days: i64) -> f64 {
    let days = days.min(MAX_IOF_DAYS);
    present_value * days as f64 * daily_rate_pct / 100.0
}

/// Total IOF: fixed component plus all daily components, grossed up.
///
/// The tax is itself financed as part of the principal, so the naive sum
/// understates what is owed; the gross-up rescales it:
/// `sum / (loan_amount - sum) * loan_amount`.
///
/// Precondition: accumulated tax must stay well below `loan_amount`. As the
/// sum approaches the loan amount the division blows up and the result goes
/// non-finite; no guard is applied here.
pub fn total_iof(fixed: f64, daily: &[f64], loan_amount: f64) -> f64 {
    let sum: f64 = fixed + daily.iter().sum::<f64>();
    sum / (loan_amount - sum) * loan_amount
}
