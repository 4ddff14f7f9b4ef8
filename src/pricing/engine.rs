//! Pricing engine: installment composer and offer range search

use crate::loan::{LoanParameters, PricingRequest};

use super::annuity::{pmt, pmt_adjusted, present_value};
use super::fees::{daily_iof, fixed_iof, origination_fee, total_iof};
use super::irr::{internal_rate, NewtonXirr, XirrSolver};
use super::quote::{InstallmentQuote, InstallmentSet};
use super::schedule::{build_schedule, days_between};

/// Main pricing engine
///
/// Holds the immutable loan parameters and the root finder used for the
/// IRR step. Every pricing call is a pure function of its inputs, so one
/// engine can serve concurrent callers.
pub struct PricingEngine {
    params: LoanParameters,
    solver: Box<dyn XirrSolver>,
}

impl PricingEngine {
    /// Create an engine with the default Newton-Raphson root finder
    pub fn new(params: LoanParameters) -> Self {
        Self {
            params,
            solver: Box::new(NewtonXirr),
        }
    }

    /// Create an engine with a custom root finder
    pub fn with_solver(params: LoanParameters, solver: Box<dyn XirrSolver>) -> Self {
        Self { params, solver }
    }

    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    /// Price one installment option for the requested principal.
    ///
    /// Two-pass structure: the payment is first computed against the pre-tax
    /// financed amount to obtain a schedule and its IRR, the tax is accrued
    /// over that schedule, and the payment is then re-priced once against
    /// the tax-inclusive financed amount. Deliberately a single re-price,
    /// not a fixed-point iteration.
    pub fn quote(&self, request: &PricingRequest, installments: u32) -> InstallmentQuote {
        let p = &self.params;

        let fee = origination_fee(request.principal, p.tac_rate_pct, p.tac_cap);
        let pre_tax_financed = request.principal + fee;

        // Pass one: provisional payment and its dated schedule
        let provisional = pmt_adjusted(
            pre_tax_financed,
            p.monthly_rate_pct,
            installments,
            request.days_to_first_payment,
        );
        let schedule = build_schedule(
            pre_tax_financed,
            provisional,
            installments,
            p.max_installments,
            request.days_to_first_payment,
            request.disbursement_date,
        );
        let annual_rate = internal_rate(self.solver.as_ref(), &schedule);

        // Daily tax accrues on each repayment discounted back to the
        // disbursement date at the schedule's own IRR
        let mut daily_taxes = Vec::with_capacity(schedule.len().saturating_sub(1));
        let mut elapsed: i64 = 0;
        let mut prev_date = None;

        for flow in &schedule[1..] {
            if flow.amount == 0.0 {
                break;
            }
            elapsed += match prev_date {
                None => request.days_to_first_payment,
                Some(prev) => days_between(flow.date, prev),
            };
            let discounted = present_value(flow.amount, annual_rate, elapsed);
            daily_taxes.push(daily_iof(discounted, p.daily_iof_pct, elapsed));
            prev_date = Some(flow.date);
        }

        let total_tax = total_iof(
            fixed_iof(pre_tax_financed, p.annual_iof_pct),
            &daily_taxes,
            pre_tax_financed,
        );

        // Pass two: the tax is financed too, re-price against the full amount
        let financed_amount = request.principal + fee + total_tax;
        let payment = pmt(financed_amount, p.monthly_rate_pct, installments);

        InstallmentQuote {
            installments,
            payment,
            financed_amount,
            principal: request.principal,
            origination_fee: fee,
            total_tax,
        }
    }

    /// Produce the admissible offers for a request, shortest period first.
    ///
    /// Scans installment counts from the configured minimum upward and stops
    /// at the first quote whose payment falls below the floor: payments are
    /// non-increasing in the installment count under the annuity formula, so
    /// nothing past that point qualifies.
    pub fn search(&self, request: &PricingRequest) -> InstallmentSet {
        let p = &self.params;
        let mut quotes = Vec::new();

        for installments in p.min_installments..=p.max_installments {
            let quote = self.quote(request, installments);
            if quote.payment < p.min_installment_value {
                log::debug!(
                    "search: {} installments pays {:.2}, below floor {:.2}; stopping",
                    installments,
                    quote.payment,
                    p.min_installment_value
                );
                break;
            }
            quotes.push(quote);
        }

        InstallmentSet::new(quotes)
    }
}
