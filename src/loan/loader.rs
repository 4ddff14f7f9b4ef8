//! File loaders for loan parameters and request batches
//!
//! Parameters load from a JSON file; batches of pricing requests load from
//! CSV with columns `principal,days_to_first_payment,disbursement_date`
//! (date in `YYYY-MM-DD`).

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use super::data::{LoanParameters, PricingRequest};

/// Errors surfaced while loading loan data from files
#[derive(Debug, Error)]
pub enum LoanDataError {
    #[error("failed to read loan data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid parameters JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid request CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("request row {row}: {reason}")]
    BadRow { row: usize, reason: String },
}

/// Load loan parameters from a JSON file
pub fn load_parameters(path: &Path) -> Result<LoanParameters, LoanDataError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

/// Load a batch of pricing requests from a CSV file
pub fn load_requests(path: &Path) -> Result<Vec<PricingRequest>, LoanDataError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut requests = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 3 {
            return Err(LoanDataError::BadRow {
                row,
                reason: format!("expected 3 columns, found {}", record.len()),
            });
        }

        let principal: f64 = record[0].parse().map_err(|_| LoanDataError::BadRow {
            row,
            reason: format!("bad principal {:?}", &record[0]),
        })?;
        let days_to_first_payment: i64 =
            record[1].parse().map_err(|_| LoanDataError::BadRow {
                row,
                reason: format!("bad days_to_first_payment {:?}", &record[1]),
            })?;
        let disbursement_date: NaiveDate =
            record[2].parse().map_err(|_| LoanDataError::BadRow {
                row,
                reason: format!("bad disbursement_date {:?}", &record[2]),
            })?;

        requests.push(PricingRequest {
            principal,
            days_to_first_payment,
            disbursement_date,
        });
    }

    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_parameters_from_json() {
        let path = temp_file(
            "installment_engine_params.json",
            r#"{
                "monthly_rate_pct": 1.99,
                "annual_iof_pct": 0.38,
                "daily_iof_pct": 0.0082,
                "min_installments": 6,
                "max_installments": 36,
                "min_installment_value": 100.0,
                "tac_rate_pct": 10.0,
                "tac_cap": 300.0
            }"#,
        );

        let params = load_parameters(&path).unwrap();
        assert_eq!(params.monthly_rate_pct, 1.99);
        assert_eq!(params.min_installments, 6);
        assert_eq!(params.max_installments, 36);
        assert_eq!(params.tac_cap, 300.0);
    }

    #[test]
    fn test_load_requests_from_csv() {
        let path = temp_file(
            "installment_engine_requests.csv",
            "principal,days_to_first_payment,disbursement_date\n\
             1000.0,30,2024-03-05\n\
             5000.0,45,2024-03-06\n",
        );

        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].principal, 1000.0);
        assert_eq!(requests[1].days_to_first_payment, 45);
        assert_eq!(
            requests[1].disbursement_date,
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
        );
    }

    #[test]
    fn test_bad_row_is_reported_with_position() {
        let path = temp_file(
            "installment_engine_bad_requests.csv",
            "principal,days_to_first_payment,disbursement_date\n\
             1000.0,thirty,2024-03-05\n",
        );

        let err = load_requests(&path).unwrap_err();
        match err {
            LoanDataError::BadRow { row, .. } => assert_eq!(row, 0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_parameters(Path::new("/nonexistent/params.json")).unwrap_err();
        assert!(matches!(err, LoanDataError::Io(_)));
    }
}
