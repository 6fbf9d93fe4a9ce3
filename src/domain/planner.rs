//! Pure payoff computations over a collection of debts.
//!
//! Everything in this module is a view computation: inputs are borrowed,
//! never mutated, and repeated calls over identical input yield identical
//! output. The estimate blends all debts into a single average interest
//! rate rather than amortizing each debt separately; the resulting figure
//! is an approximation, not a schedule.

use log::trace;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

use super::debt::{Balance, Debt};
use super::strategy::Strategy;

/// Hard cap on the payoff simulation: 50 years of monthly steps.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Outcome of the aggregate payoff estimate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PayoffEstimate {
    /// No debts, nothing owed, or no money being paid: no estimate applies.
    NotApplicable,
    /// Paid off after this many monthly payments.
    Months(u32),
    /// The minimum payments never outrun the accruing interest within the
    /// 600-month horizon.
    OverFiftyYears,
}

impl fmt::Display for PayoffEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffEstimate::NotApplicable => write!(f, "N/A"),
            PayoffEstimate::OverFiftyYears => write!(f, "Over 50 years"),
            PayoffEstimate::Months(months) => {
                let years = months / 12;
                let rest = months % 12;
                if years > 0 {
                    write!(f, "{} year{}", years, plural(years))?;
                    if rest > 0 {
                        write!(f, ", {} month{}", rest, plural(rest))?;
                    }
                    Ok(())
                } else {
                    write!(f, "{} month{}", rest, plural(rest))
                }
            }
        }
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Aggregate figures for a set of debts.
#[derive(Debug, PartialEq, Clone)]
pub struct DebtSummary {
    pub total_debt: Balance,
    pub monthly_payment: Balance,
    pub avg_interest_rate: Decimal,
    pub payoff: PayoffEstimate,
}

impl DebtSummary {
    /// Average rate as displayed: one decimal place, half away from zero.
    pub fn display_rate(&self) -> Decimal {
        self.avg_interest_rate
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// One entry of a payoff plan: pay the minimum on every debt, then direct
/// any surplus at the top-ranked entry until it is gone.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PlanStep {
    pub rank: u32,
    pub debt: u32,
    pub name: String,
    pub balance: Balance,
    pub rate: Decimal,
}

impl PlanStep {
    pub fn description(&self) -> String {
        format!(
            "Pay minimum on all debts, then put extra money towards {} ({}% interest).",
            self.name, self.rate
        )
    }
}

/// Computes the aggregate summary: totals, blended rate, payoff estimate.
pub fn summarize(debts: &[Debt]) -> DebtSummary {
    if debts.is_empty() {
        return DebtSummary {
            total_debt: Balance::ZERO,
            monthly_payment: Balance::ZERO,
            avg_interest_rate: Decimal::ZERO,
            payoff: PayoffEstimate::NotApplicable,
        };
    }

    let total_debt = debts
        .iter()
        .fold(Balance::ZERO, |sum, d| sum + d.remaining_amount);
    let monthly_payment = debts
        .iter()
        .fold(Balance::ZERO, |sum, d| sum + d.minimum_payment);
    let avg_interest_rate =
        debts.iter().map(|d| d.interest_rate).sum::<Decimal>() / Decimal::from(debts.len() as u64);

    DebtSummary {
        total_debt,
        monthly_payment,
        avg_interest_rate,
        payoff: simulate(total_debt, monthly_payment, avg_interest_rate),
    }
}

/// Estimates how long minimum payments take to clear the aggregate balance.
pub fn estimate_payoff_months(debts: &[Debt]) -> PayoffEstimate {
    summarize(debts).payoff
}

fn simulate(
    total_debt: Balance,
    monthly_payment: Balance,
    avg_interest_rate: Decimal,
) -> PayoffEstimate {
    if total_debt <= Balance::ZERO || monthly_payment <= Balance::ZERO {
        return PayoffEstimate::NotApplicable;
    }

    let rate = monthly_rate(avg_interest_rate);
    let mut remaining = total_debt.0;
    let mut months = 0u32;

    // No rounding mid-simulation; the <= 0 comparison is exact against the
    // accumulated value.
    while remaining > Decimal::ZERO && months < MAX_PAYOFF_MONTHS {
        months += 1;
        remaining = remaining * (Decimal::ONE + rate) - monthly_payment.0;
        trace!("month {months}, remaining {remaining}");
    }

    if remaining > Decimal::ZERO {
        PayoffEstimate::OverFiftyYears
    } else {
        PayoffEstimate::Months(months)
    }
}

fn monthly_rate(annual_rate: Decimal) -> Decimal {
    annual_rate / Decimal::ONE_HUNDRED / Decimal::from(12u32)
}

/// Orders the debts under the given strategy into a ranked payoff plan.
///
/// Both orderings are stable: debts that tie keep their input order.
pub fn build_payoff_plan(debts: &[Debt], strategy: Strategy) -> Vec<PlanStep> {
    let mut sorted: Vec<&Debt> = debts.iter().collect();

    match strategy {
        Strategy::Avalanche => sorted.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate)),
        Strategy::Snowball => sorted.sort_by(|a, b| a.remaining_amount.cmp(&b.remaining_amount)),
    }

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, debt)| PlanStep {
            rank: index as u32 + 1,
            debt: debt.id,
            name: debt.name.clone(),
            balance: debt.remaining_amount,
            rate: debt.interest_rate,
        })
        .collect()
}

/// Projects the aggregate balance month by month under minimum payments.
///
/// Returns `periods + 1` points, the first being the current total. Unlike
/// the payoff simulation this series clamps at zero, since it feeds a
/// balance-over-time display.
pub fn project_balances(debts: &[Debt], periods: u32) -> Vec<Balance> {
    if debts.is_empty() {
        return Vec::new();
    }

    let summary = summarize(debts);
    let rate = monthly_rate(summary.avg_interest_rate);
    let mut series = Vec::with_capacity(periods as usize + 1);
    let mut current = summary.total_debt.0;
    series.push(summary.total_debt);

    for _ in 0..periods {
        let interest = current * rate;
        current = (current + interest - summary.monthly_payment.0).max(Decimal::ZERO);
        series.push(Balance::new(current));
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::debt::DebtKind;
    use rust_decimal_macros::dec;

    fn debt(id: u32, remaining: Decimal, rate: Decimal, min_payment: Decimal) -> Debt {
        Debt {
            id,
            name: format!("Debt {id}"),
            kind: DebtKind::Loan,
            total_amount: Balance::new(remaining),
            remaining_amount: Balance::new(remaining),
            interest_rate: rate,
            minimum_payment: Balance::new(min_payment),
            due_date: 1,
            progress: 0,
        }
    }

    #[test]
    fn test_estimate_empty_set() {
        assert_eq!(estimate_payoff_months(&[]), PayoffEstimate::NotApplicable);
    }

    #[test]
    fn test_estimate_zero_payment() {
        let debts = vec![debt(1, dec!(5000), dec!(20), dec!(0))];
        assert_eq!(
            estimate_payoff_months(&debts),
            PayoffEstimate::NotApplicable
        );
    }

    #[test]
    fn test_estimate_zero_balance() {
        let debts = vec![debt(1, dec!(0), dec!(20), dec!(100))];
        assert_eq!(
            estimate_payoff_months(&debts),
            PayoffEstimate::NotApplicable
        );
    }

    #[test]
    fn test_estimate_converging_single_debt() {
        // 5000 at 20% APR with a 200 monthly payment: interest starts at
        // ~83.33/month, so the balance shrinks and clears in month 33.
        let debts = vec![debt(1, dec!(5000), dec!(20), dec!(200))];
        assert_eq!(estimate_payoff_months(&debts), PayoffEstimate::Months(33));
    }

    #[test]
    fn test_estimate_diverging_debt() {
        // 10000 at 24% APR accrues ~200/month against a 50 payment.
        let debts = vec![debt(1, dec!(10000), dec!(24), dec!(50))];
        assert_eq!(
            estimate_payoff_months(&debts),
            PayoffEstimate::OverFiftyYears
        );
    }

    #[test]
    fn test_estimate_payment_equal_to_interest_never_converges() {
        // 12% APR on 10000 is exactly 100/month; the balance never moves.
        let debts = vec![debt(1, dec!(10000), dec!(12), dec!(100))];
        assert_eq!(
            estimate_payoff_months(&debts),
            PayoffEstimate::OverFiftyYears
        );
    }

    #[test]
    fn test_estimate_single_month() {
        let debts = vec![debt(1, dec!(100), dec!(12), dec!(500))];
        assert_eq!(estimate_payoff_months(&debts), PayoffEstimate::Months(1));
    }

    #[test]
    fn test_estimate_display_formats() {
        assert_eq!(PayoffEstimate::NotApplicable.to_string(), "N/A");
        assert_eq!(PayoffEstimate::OverFiftyYears.to_string(), "Over 50 years");
        assert_eq!(PayoffEstimate::Months(1).to_string(), "1 month");
        assert_eq!(PayoffEstimate::Months(9).to_string(), "9 months");
        assert_eq!(PayoffEstimate::Months(12).to_string(), "1 year");
        assert_eq!(PayoffEstimate::Months(13).to_string(), "1 year, 1 month");
        assert_eq!(PayoffEstimate::Months(33).to_string(), "2 years, 9 months");
    }

    #[test]
    fn test_summary_aggregates() {
        let debts = vec![
            debt(1, dec!(3000), dec!(19.9), dec!(150)),
            debt(2, dec!(2000), dec!(6.5), dec!(250)),
        ];
        let summary = summarize(&debts);
        assert_eq!(summary.total_debt, Balance::new(dec!(5000)));
        assert_eq!(summary.monthly_payment, Balance::new(dec!(400)));
        assert_eq!(summary.avg_interest_rate, dec!(13.2));
        assert!(matches!(summary.payoff, PayoffEstimate::Months(_)));
    }

    #[test]
    fn test_summary_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_debt, Balance::ZERO);
        assert_eq!(summary.monthly_payment, Balance::ZERO);
        assert_eq!(summary.avg_interest_rate, Decimal::ZERO);
        assert_eq!(summary.payoff, PayoffEstimate::NotApplicable);
    }

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let debts = vec![
            debt(1, dec!(500), dec!(5), dec!(50)),
            debt(2, dec!(1000), dec!(20), dec!(50)),
        ];
        let plan = build_payoff_plan(&debts, Strategy::Avalanche);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].debt, 2);
        assert_eq!(plan[0].rank, 1);
        assert_eq!(plan[1].debt, 1);
        assert_eq!(plan[1].rank, 2);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let debts = vec![
            debt(1, dec!(500), dec!(5), dec!(50)),
            debt(2, dec!(1000), dec!(20), dec!(50)),
        ];
        let plan = build_payoff_plan(&debts, Strategy::Snowball);
        assert_eq!(plan[0].debt, 1);
        assert_eq!(plan[1].debt, 2);
    }

    #[test]
    fn test_plan_ties_keep_input_order() {
        let debts = vec![
            debt(7, dec!(800), dec!(10), dec!(50)),
            debt(3, dec!(800), dec!(10), dec!(50)),
            debt(5, dec!(800), dec!(10), dec!(50)),
        ];
        for strategy in [Strategy::Avalanche, Strategy::Snowball] {
            let plan = build_payoff_plan(&debts, strategy);
            let ids: Vec<u32> = plan.iter().map(|s| s.debt).collect();
            assert_eq!(ids, vec![7, 3, 5]);
        }
    }

    #[test]
    fn test_plan_empty_input() {
        assert!(build_payoff_plan(&[], Strategy::Avalanche).is_empty());
    }

    #[test]
    fn test_plan_does_not_mutate_input() {
        let debts = vec![
            debt(1, dec!(500), dec!(5), dec!(50)),
            debt(2, dec!(1000), dec!(20), dec!(50)),
        ];
        let before = debts.clone();
        let first = build_payoff_plan(&debts, Strategy::Avalanche);
        let second = build_payoff_plan(&debts, Strategy::Avalanche);
        assert_eq!(debts, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_step_description() {
        let step = PlanStep {
            rank: 1,
            debt: 2,
            name: "Visa".to_string(),
            balance: Balance::new(dec!(1000)),
            rate: dec!(20),
        };
        assert_eq!(
            step.description(),
            "Pay minimum on all debts, then put extra money towards Visa (20% interest)."
        );
    }

    #[test]
    fn test_projection_starts_at_total_and_declines() {
        let debts = vec![debt(1, dec!(5000), dec!(20), dec!(200))];
        let series = project_balances(&debts, 7);
        assert_eq!(series.len(), 8);
        assert_eq!(series[0], Balance::new(dec!(5000)));
        for window in series.windows(2) {
            assert!(window[1] < window[0]);
        }
    }

    #[test]
    fn test_projection_clamps_at_zero() {
        let debts = vec![debt(1, dec!(100), dec!(12), dec!(500))];
        let series = project_balances(&debts, 3);
        assert_eq!(series[1], Balance::ZERO);
        assert_eq!(series[3], Balance::ZERO);
    }

    #[test]
    fn test_projection_empty_input() {
        assert!(project_balances(&[], 7).is_empty());
    }

    #[test]
    fn test_display_rate_rounds_to_one_decimal() {
        let debts = vec![
            debt(1, dec!(100), dec!(19.9), dec!(10)),
            debt(2, dec!(100), dec!(6.4), dec!(10)),
        ];
        // mean of 19.9 and 6.4 is 13.15 -> 13.2 half away from zero
        assert_eq!(summarize(&debts).display_rate(), dec!(13.2));
    }
}
