//! Price a block of requests from a CSV file
//!
//! Loads pricing requests (principal, days to first payment, disbursement
//! date), prices them in parallel, and reports per-request offer summaries.
//! Pass --json for machine-readable output.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use installment_engine::loan::loader;
use installment_engine::pricing::OfferSummary;
use installment_engine::{InstallmentQuote, LoanParameters, PricingEngine};

#[derive(Parser, Debug)]
#[command(name = "price_block", about = "Price a CSV block of loan requests")]
struct Args {
    /// Request CSV: principal,days_to_first_payment,disbursement_date
    requests: PathBuf,

    /// Loan parameters JSON file (built-in retail defaults when omitted)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Emit the full report as JSON instead of a console summary
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BlockReport {
    request_count: usize,
    admissible_count: usize,
    execution_time_ms: u64,
    results: Vec<RequestResult>,
}

#[derive(Serialize)]
struct RequestResult {
    principal: f64,
    days_to_first_payment: i64,
    summary: OfferSummary,
    selected: Option<InstallmentQuote>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = match &args.params {
        Some(path) => loader::load_parameters(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => LoanParameters::default_retail(),
    };

    let requests = loader::load_requests(&args.requests)
        .with_context(|| format!("loading requests from {}", args.requests.display()))?;

    let start = Instant::now();
    let engine = PricingEngine::new(params);

    let results: Vec<RequestResult> = requests
        .par_iter()
        .map(|request| {
            let set = engine.search(request);
            RequestResult {
                principal: request.principal,
                days_to_first_payment: request.days_to_first_payment,
                summary: set.summary(),
                selected: set.selected().cloned(),
            }
        })
        .collect();

    let report = BlockReport {
        request_count: results.len(),
        admissible_count: results.iter().filter(|r| r.selected.is_some()).count(),
        execution_time_ms: start.elapsed().as_millis() as u64,
        results,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Priced {} requests in {}ms ({} with an admissible offer)",
        report.request_count, report.execution_time_ms, report.admissible_count
    );
    println!(
        "{:>12} {:>8} {:>12} {:>12} {:>14}",
        "Principal", "Offers", "Selected", "Payment", "Payment Range"
    );
    println!("{}", "-".repeat(62));

    for result in &report.results {
        match &result.selected {
            Some(quote) => println!(
                "{:>12.2} {:>8} {:>12} {:>12.2} {:>6.2}-{:>7.2}",
                result.principal,
                result.summary.offers,
                quote.installments,
                quote.payment,
                result.summary.min_payment,
                result.summary.max_payment,
            ),
            None => println!(
                "{:>12.2} {:>8} {:>12} {:>12} {:>14}",
                result.principal, 0, "-", "-", "-"
            ),
        }
    }

    Ok(())
}
