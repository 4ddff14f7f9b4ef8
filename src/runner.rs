//! Offer runner for batch pricing
//!
//! Loads parameters once, then prices many requests without re-reading
//! configuration files.

use std::path::Path;

use crate::loan::{LoanDataError, LoanParameters, PricingRequest};
use crate::pricing::{InstallmentSet, PricingEngine};

/// Pre-loaded offer runner
///
/// # Example
/// ```ignore
/// let runner = OfferRunner::from_json(Path::new("params.json"))?;
///
/// for principal in [1_000.0, 5_000.0, 10_000.0] {
///     let set = runner.run(&PricingRequest::new(principal, 30));
/// }
/// ```
pub struct OfferRunner {
    engine: PricingEngine,
}

impl OfferRunner {
    /// Create a runner with default in-memory parameters
    pub fn new() -> Self {
        Self::with_params(LoanParameters::default_retail())
    }

    /// Create a runner by loading parameters from a JSON file
    pub fn from_json(path: &Path) -> Result<Self, LoanDataError> {
        Ok(Self::with_params(crate::loan::loader::load_parameters(
            path,
        )?))
    }

    /// Create a runner with pre-built parameters
    pub fn with_params(params: LoanParameters) -> Self {
        Self {
            engine: PricingEngine::new(params),
        }
    }

    /// Run one offer search
    pub fn run(&self, request: &PricingRequest) -> InstallmentSet {
        self.engine.search(request)
    }

    /// Run offer searches for a batch of requests
    pub fn run_batch(&self, requests: &[PricingRequest]) -> Vec<InstallmentSet> {
        requests.iter().map(|r| self.engine.search(r)).collect()
    }

    /// Get reference to the loaded parameters for inspection
    pub fn params(&self) -> &LoanParameters {
        self.engine.params()
    }

    /// Access the underlying engine, e.g. for single quotes
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }
}

impl Default for OfferRunner {
    fn default() -> Self {
        Self::new()
    }
}
