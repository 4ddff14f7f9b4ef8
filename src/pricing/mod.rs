//! Pricing engine for installment loan offers

mod annuity;
mod engine;
mod fees;
mod irr;
mod quote;
mod schedule;

pub use annuity::{pmt, pmt_adjusted, present_value};
pub use engine::PricingEngine;
pub use fees::{daily_iof, fixed_iof, origination_fee, total_iof, MAX_IOF_DAYS};
pub use irr::{internal_rate, xnpv, NewtonXirr, XirrSolver, RATE_GUESSES};
pub use quote::{InstallmentQuote, InstallmentSet, OfferSummary};
pub use schedule::{build_schedule, days_between, CashFlow};
