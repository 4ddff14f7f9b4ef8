//! Installment Engine - pricing engine for installment loan offers
//!
//! This library provides:
//! - Origination fee (TAC) and transaction tax (IOF) calculators
//! - Fixed-annuity payment solving with first-period day-count adjustment
//! - Dated cash-flow schedule generation
//! - Annualized IRR (XIRR) solving with a pluggable root finder
//! - Ranked installment offer search over a period range

pub mod loan;
pub mod pricing;
pub mod runner;

// Re-export commonly used types
pub use loan::{LoanParameters, PricingRequest};
pub use pricing::{InstallmentQuote, InstallmentSet, PricingEngine};
pub use runner::OfferRunner;
