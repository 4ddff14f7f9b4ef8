//! Loan parameters and pricing request data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Commercial parameters for a loan product.
///
/// Supplied once per pricing run and never mutated mid-computation. Rates
/// are percentages as they appear in the product tables (0.38 means 0.38%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Nominal monthly interest rate (%)
    pub monthly_rate_pct: f64,

    /// Annual (fixed) IOF rate (%)
    pub annual_iof_pct: f64,

    /// Daily IOF rate (%)
    pub daily_iof_pct: f64,

    /// Smallest installment count offered
    pub min_installments: u32,

    /// Largest installment count offered
    pub max_installments: u32,

    /// Floor for the periodic payment; offers below it are not admissible
    pub min_installment_value: f64,

    /// Origination fee (TAC) rate (%)
    pub tac_rate_pct: f64,

    /// Origination fee (TAC) cap amount
    pub tac_cap: f64,
}

impl LoanParameters {
    /// Representative retail parameters for in-memory use
    pub fn default_retail() -> Self {
        Self {
            monthly_rate_pct: 2.5,
            annual_iof_pct: 0.38,
            daily_iof_pct: 0.0082,
            min_installments: 3,
            max_installments: 48,
            min_installment_value: 50.0,
            tac_rate_pct: 12.0,
            tac_cap: 250.0,
        }
    }
}

/// One pricing request: the borrower-side inputs for a single offer search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Principal requested
    pub principal: f64,

    /// Days from disbursement to the first payment
    pub days_to_first_payment: i64,

    /// Disbursement date; payment dates roll forward from it
    pub disbursement_date: NaiveDate,
}

impl PricingRequest {
    /// Request disbursed today
    pub fn new(principal: f64, days_to_first_payment: i64) -> Self {
        Self {
            principal,
            days_to_first_payment,
            disbursement_date: chrono::Local::now().date_naive(),
        }
    }
}
