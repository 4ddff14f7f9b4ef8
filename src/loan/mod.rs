//! Loan-side data: product parameters, pricing requests, and file loaders

mod data;
pub mod loader;

pub use data::{LoanParameters, PricingRequest};
pub use loader::LoanDataError;
