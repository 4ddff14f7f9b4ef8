//! Installment Engine CLI
//!
//! Prices the admissible installment offers for a requested principal and
//! prints the full cost structure of each.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use installment_engine::{LoanParameters, OfferRunner, PricingRequest};

#[derive(Parser, Debug)]
#[command(name = "installment_engine", about = "Price installment loan offers")]
struct Args {
    /// Principal requested
    #[arg(long, default_value_t = 5000.0)]
    principal: f64,

    /// Days from disbursement to the first payment
    #[arg(long, default_value_t = 30)]
    days_to_first: i64,

    /// Loan parameters JSON file (built-in retail defaults when omitted)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the offers to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.params {
        Some(path) => OfferRunner::from_json(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => OfferRunner::new(),
    };

    let params: &LoanParameters = runner.params();
    let request = PricingRequest::new(args.principal, args.days_to_first);

    println!("Installment Engine v0.1.0");
    println!("=========================\n");
    println!("Principal: ${:.2}", request.principal);
    println!("  Monthly rate: {:.4}%", params.monthly_rate_pct);
    println!(
        "  TAC: {:.2}% capped at ${:.2}",
        params.tac_rate_pct, params.tac_cap
    );
    println!(
        "  IOF: {:.4}% fixed + {:.4}% daily",
        params.annual_iof_pct, params.daily_iof_pct
    );
    println!(
        "  Installments {}..={}, payment floor ${:.2}",
        params.min_installments, params.max_installments, params.min_installment_value
    );
    println!();

    let set = runner.run(&request);

    println!("Offers ({}):", set.len());
    println!(
        "{:>12} {:>12} {:>12} {:>10} {:>10} {:>12}",
        "Installments", "Payment", "Financed", "Fee", "Tax", "Total Paid"
    );
    println!("{}", "-".repeat(74));

    for quote in &set.quotes {
        println!(
            "{:>12} {:>12.2} {:>12.2} {:>10.2} {:>10.2} {:>12.2}",
            quote.installments,
            quote.payment,
            quote.financed_amount,
            quote.origination_fee,
            quote.total_tax,
            quote.payment * quote.installments as f64,
        );
    }

    match set.selected() {
        Some(quote) => println!(
            "\nSelected offer: {} installments of ${:.2}",
            quote.installments, quote.payment
        ),
        None => println!("\nNo installment count in range meets the payment floor"),
    }

    if let Some(path) = &args.csv_out {
        let mut file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;

        writeln!(
            file,
            "Installments,Payment,FinancedAmount,Principal,OriginationFee,TotalTax"
        )?;
        for quote in &set.quotes {
            writeln!(
                file,
                "{},{:.8},{:.8},{:.8},{:.8},{:.8}",
                quote.installments,
                quote.payment,
                quote.financed_amount,
                quote.principal,
                quote.origination_fee,
                quote.total_tax,
            )?;
        }

        println!("Offers written to: {}", path.display());
    }

    Ok(())
}
