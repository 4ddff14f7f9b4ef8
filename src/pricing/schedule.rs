//! Dated cash-flow schedules for installment loans

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single dated cash flow.
///
/// Negative amount = disbursement to the borrower, positive = repayment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub amount: f64,
    pub date: NaiveDate,
}

/// Build the dated schedule for an installment loan.
///
/// The first flow is the disbursement (`-financed_amount`) on
/// `disbursement_date`. Repayments follow every 30 days starting
/// `days_to_first` days out, up to `installments` entries (never more than
/// `max_installments`).
///
/// Each repayment date is computed by plain day addition and then snapped to
/// the first payment's day-of-month, approximating "same day each month"
/// billing without calendar-month arithmetic. When that day does not exist
/// in the rolled month (e.g. the 31st in a 30-day month) the raw
/// day-addition date is kept; the resulting month skew is accepted reference
/// behavior.
pub fn build_schedule(
    financed_amount: f64,
    payment: f64,
    installments: u32,
    max_installments: u32,
    days_to_first: i64,
    disbursement_date: NaiveDate,
) -> Vec<CashFlow> {
    let count = installments.min(max_installments);
    let mut flows = Vec::with_capacity(count as usize + 1);

    flows.push(CashFlow {
        amount: -financed_amount,
        date: disbursement_date,
    });

    let anchor_day = (disbursement_date + Duration::days(days_to_first)).day();

    for i in 0..count as i64 {
        let raw = disbursement_date + Duration::days(days_to_first + 30 * i);
        let date = raw.with_day(anchor_day).unwrap_or(raw);
        flows.push(CashFlow {
            amount: payment,
            date,
        });
    }

    flows
}

/// Whole days between two dates, order-independent.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}
