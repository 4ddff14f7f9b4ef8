//! Annualized internal rate of return (XIRR) for dated cash-flow schedules
//!
//! The root-finding routine is pluggable: the engine only requires something
//! that takes an ordered schedule plus a seed and may or may not converge.

use super::schedule::CashFlow;

/// Seed ladder for the retry wrapper. Each failed attempt moves to the next
/// guess; exhausting the ladder resolves to a rate of 0.
pub const RATE_GUESSES: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

const TOLERANCE: f64 = 1e-9;
const MAX_ITERATIONS: u32 = 100;
const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;

/// Root finder for dated cash-flow schedules.
///
/// Implementations solve for the annualized rate `x` with
/// `sum(amount_i / (1 + x)^(days_i / 365)) = 0`, returning `None` on
/// non-convergence. Normal non-convergence must never panic.
///
/// Solvers are stateless with respect to a call, so they are shared across
/// threads when requests are priced in parallel.
pub trait XirrSolver: Send + Sync {
    fn solve(&self, flows: &[CashFlow], guess: f64) -> Option<f64>;
}

/// Newton-Raphson XIRR with a bisection fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonXirr;

impl XirrSolver for NewtonXirr {
    fn solve(&self, flows: &[CashFlow], guess: f64) -> Option<f64> {
        let mut rate = guess.clamp(MIN_RATE, MAX_RATE);

        for _ in 0..MAX_ITERATIONS {
            let (npv, dnpv) = xnpv_and_derivative(flows, rate);

            if !npv.is_finite() || !dnpv.is_finite() || dnpv.abs() < 1e-20 {
                return solve_bisection(flows);
            }

            let new_rate = (rate - npv / dnpv).clamp(MIN_RATE, MAX_RATE);

            if (new_rate - rate).abs() < TOLERANCE {
                // A stalled step at the rate clamp is not a root; only accept
                // when the NPV actually vanished.
                if residual_vanishes(flows, new_rate) {
                    return Some(new_rate);
                }
                return solve_bisection(flows);
            }

            rate = new_rate;
        }

        solve_bisection(flows)
    }
}

/// Net present value of the schedule at an annual rate, with day-count
/// exponents relative to the first flow's date.
pub fn xnpv(flows: &[CashFlow], rate: f64) -> f64 {
    let base = match flows.first() {
        Some(flow) => flow.date,
        None => return 0.0,
    };

    flows
        .iter()
        .map(|flow| {
            let years = (flow.date - base).num_days() as f64 / 365.0;
            flow.amount / (1.0 + rate).powf(years)
        })
        .sum()
}

fn xnpv_and_derivative(flows: &[CashFlow], rate: f64) -> (f64, f64) {
    let base = match flows.first() {
        Some(flow) => flow.date,
        None => return (0.0, 0.0),
    };

    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for flow in flows {
        let years = (flow.date - base).num_days() as f64 / 365.0;
        let discount = (1.0 + rate).powf(years);
        npv += flow.amount / discount;
        dnpv -= years * flow.amount / ((1.0 + rate) * discount);
    }

    (npv, dnpv)
}

/// NPV at the candidate rate, relative to the schedule's total magnitude.
fn residual_vanishes(flows: &[CashFlow], rate: f64) -> bool {
    let scale: f64 = flows.iter().map(|f| f.amount.abs()).sum::<f64>().max(1.0);
    (xnpv(flows, rate) / scale).abs() < 1e-6
}

/// Fallback when Newton-Raphson stalls: bisect over the full rate range.
fn solve_bisection(flows: &[CashFlow]) -> Option<f64> {
    let mut low = MIN_RATE;
    let mut high = MAX_RATE;

    let npv_low = xnpv(flows, low);
    let npv_high = xnpv(flows, high);

    if !npv_low.is_finite() || !npv_high.is_finite() || npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..1000 {
        let mid = (low + high) / 2.0;
        let npv_mid = xnpv(flows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        if npv_mid * xnpv(flows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

/// Annualized IRR of a schedule, retried over the fixed guess ladder.
///
/// Schedules with fewer than two flows resolve to 0, as does exhausting
/// every guess without convergence. A rate of 0 is therefore a valid (if
/// financially meaningless) result, never an error.
pub fn internal_rate(solver: &dyn XirrSolver, flows: &[CashFlow]) -> f64 {
    if flows.len() < 2 {
        return 0.0;
    }

    for guess in RATE_GUESSES {
        match solver.solve(flows, guess) {
            Some(rate) if rate.is_finite() => return rate,
            _ => log::debug!("xirr: no convergence from guess {guess}, retrying"),
        }
    }

    log::debug!("xirr: all guesses exhausted, defaulting to rate 0");
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flow(amount: f64, y: i32, m: u32, d: u32) -> CashFlow {
        CashFlow {
            amount,
            date: date(y, m, d),
        }
    }

    #[test]
    fn test_equal_opposite_flows_give_zero_rate() {
        // Same magnitude out and back a year apart: NPV zeroes at exactly 0%
        let flows = vec![flow(-1000.0, 2024, 1, 1), flow(1000.0, 2025, 1, 1)];
        let rate = internal_rate(&NewtonXirr, &flows);
        assert!(rate.abs() < 1e-6, "expected ~0, got {rate}");
    }

    #[test]
    fn test_known_one_year_return() {
        // -1000 today, +1100 in exactly 365 days: 10% annualized
        let flows = vec![flow(-1000.0, 2024, 1, 1), flow(1100.0, 2024, 12, 31)];
        let rate = internal_rate(&NewtonXirr, &flows);
        assert!((rate - 0.10).abs() < 1e-4, "expected ~10%, got {rate}");
    }

    #[test]
    fn test_empty_schedule_returns_zero() {
        assert_eq!(internal_rate(&NewtonXirr, &[]), 0.0);
    }

    #[test]
    fn test_single_flow_returns_zero() {
        let flows = vec![flow(-1000.0, 2024, 1, 1)];
        assert_eq!(internal_rate(&NewtonXirr, &flows), 0.0);
    }

    #[test]
    fn test_no_sign_change_returns_zero() {
        // All inflows: no root exists, every guess fails, safe default
        let flows = vec![flow(100.0, 2024, 1, 1), flow(100.0, 2024, 6, 1)];
        assert_eq!(internal_rate(&NewtonXirr, &flows), 0.0);
    }

    #[test]
    fn test_converged_rate_zeroes_npv() {
        // 12 level payments 30 days apart against a 1120 disbursement
        let mut flows = vec![flow(-1120.0, 2024, 3, 5)];
        let start = date(2024, 3, 5);
        for i in 1..=12 {
            flows.push(CashFlow {
                amount: 109.19,
                date: start + chrono::Duration::days(30 * i),
            });
        }

        let rate = internal_rate(&NewtonXirr, &flows);
        assert!(rate > 0.0);
        assert!(xnpv(&flows, rate).abs() < 1e-3, "residual npv too large");
    }

    #[test]
    fn test_custom_solver_is_pluggable() {
        struct FixedRate(f64);
        impl XirrSolver for FixedRate {
            fn solve(&self, _flows: &[CashFlow], _guess: f64) -> Option<f64> {
                Some(self.0)
            }
        }

        let flows = vec![flow(-100.0, 2024, 1, 1), flow(110.0, 2024, 7, 1)];
        assert_eq!(internal_rate(&FixedRate(0.25), &flows), 0.25);
    }
}
