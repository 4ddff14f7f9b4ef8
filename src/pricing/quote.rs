//! Priced installment offers

use serde::{Deserialize, Serialize};

/// One fully-priced installment option for a requested principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentQuote {
    /// Number of installments
    pub installments: u32,

    /// Final periodic payment value
    pub payment: f64,

    /// Final financed amount (principal + origination fee + total tax)
    pub financed_amount: f64,

    /// Principal requested by the borrower
    pub principal: f64,

    /// Origination fee (TAC) charged
    pub origination_fee: f64,

    /// Total transaction tax (IOF) charged, grossed up
    pub total_tax: f64,
}

/// Result of a range search: admissible offers ordered by ascending
/// installment count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentSet {
    pub quotes: Vec<InstallmentQuote>,
}

impl InstallmentSet {
    pub fn new(quotes: Vec<InstallmentQuote>) -> Self {
        Self { quotes }
    }

    /// The selected offer: the shortest-period quote that met the payment
    /// floor, or `None` when nothing in range qualified.
    pub fn selected(&self) -> Option<&InstallmentQuote> {
        self.quotes.first()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Summary statistics across the admissible offers.
    pub fn summary(&self) -> OfferSummary {
        let payments = self.quotes.iter().map(|q| q.payment);

        OfferSummary {
            offers: self.quotes.len(),
            selected_installments: self.selected().map(|q| q.installments),
            min_payment: payments.clone().fold(f64::INFINITY, f64::min),
            max_payment: payments.fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Summary statistics for an offer search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSummary {
    pub offers: usize,
    pub selected_installments: Option<u32>,
    pub min_payment: f64,
    pub max_payment: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(installments: u32, payment: f64) -> InstallmentQuote {
        InstallmentQuote {
            installments,
            payment,
            financed_amount: 1000.0,
            principal: 900.0,
            origination_fee: 50.0,
            total_tax: 50.0,
        }
    }

    #[test]
    fn test_selected_is_shortest_period() {
        let set = InstallmentSet::new(vec![quote(3, 350.0), quote(4, 270.0), quote(5, 220.0)]);
        assert_eq!(set.selected().unwrap().installments, 3);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_set_has_no_selection() {
        let set = InstallmentSet::new(Vec::new());
        assert!(set.is_empty());
        assert!(set.selected().is_none());
        assert!(set.summary().selected_installments.is_none());
    }

    #[test]
    fn test_summary_payment_range() {
        let set = InstallmentSet::new(vec![quote(3, 350.0), quote(4, 270.0), quote(5, 220.0)]);
        let summary = set.summary();
        assert_eq!(summary.offers, 3);
        assert_eq!(summary.min_payment, 220.0);
        assert_eq!(summary.max_payment, 350.0);
        assert_eq!(summary.selected_installments, Some(3));
    }
}
