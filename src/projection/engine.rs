//! Monthly compounding with contribution at the start of each month

use super::MONTHS_PER_YEAR;
use crate::chart::{reduce_to_yearly, to_fixed};
use crate::params::InvestmentParameters;
use crate::scenario::Scenario;
use serde::Serialize;

/// Round to 2 decimals the way fixed-point formatting does
///
/// Rounds the exact binary value to the nearest cent. Exact ties (e.g. x.125)
/// round away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    to_fixed(value, 2).parse().unwrap_or(value)
}

/// Project a balance month by month
///
/// Each month: `balance = (balance + monthly_contribution) * (1 + annual_rate / 12)`.
/// The emitted value is the balance rounded to cents; the running balance itself
/// stays unrounded. Returns one value per month, `years * 12` in total;
/// `years == 0` yields an empty series.
pub fn project(
    initial_capital: f64,
    years: u32,
    monthly_contribution: f64,
    annual_rate: f64,
) -> Vec<f64> {
    let monthly_rate = annual_rate / 12.0;
    let months = years as usize * MONTHS_PER_YEAR;

    let mut balance = initial_capital;
    let mut values = Vec::with_capacity(months);
    for _ in 0..months {
        balance = (balance + monthly_contribution) * (1.0 + monthly_rate);
        values.push(round_to_cents(balance));
    }
    values
}

/// Monthly and yearly series for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub monthly: Vec<f64>,
    pub yearly: Vec<f64>,
}

impl ScenarioProjection {
    /// Run the engine at the scenario's rate
    pub fn run(scenario: Scenario, params: &InvestmentParameters) -> Self {
        let monthly = project(
            params.initial_capital,
            params.years,
            params.monthly_contribution,
            scenario.annual_rate(),
        );
        let yearly = reduce_to_yearly(&monthly, params.years);
        Self {
            scenario,
            monthly,
            yearly,
        }
    }

    /// Balance at the end of the last completed year
    pub fn final_total(&self) -> Option<f64> {
        self.yearly.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{INVESTING_ANNUAL_RATE, SAVING_ANNUAL_RATE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_first_months_one_percent() {
        // 12% annual -> 1% monthly, no contribution
        let values = project(1_000.0, 1, 0.0, 0.12);
        assert_eq!(values.len(), 12);
        assert_eq!(values[0], 1010.00);
        assert_eq!(values[1], 1020.10);
        assert_eq!(values[2], 1030.30);
    }

    #[test]
    fn test_series_length() {
        for years in (10..=50).step_by(5) {
            let values = project(9_500.0, years, 2_600.0, INVESTING_ANNUAL_RATE);
            assert_eq!(values.len(), years as usize * 12);
        }
    }

    #[test]
    fn test_zero_years_is_empty() {
        assert!(project(9_500.0, 0, 2_600.0, 0.08).is_empty());
        assert!(project(0.0, 0, 0.0, 0.0).is_empty());
        assert!(project(-5.0, 0, 1e9, 3.0).is_empty());
    }

    #[test]
    fn test_contribution_added_before_interest() {
        // (1000 + 100) * 1.01 = 1111.00
        let values = project(1_000.0, 1, 100.0, 0.12);
        assert_eq!(values[0], 1111.00);
        // (1111 + 100) * 1.01 = 1223.11
        assert_eq!(values[1], 1223.11);
    }

    #[test]
    fn test_pure_compound_growth() {
        let values = project(1_000.0, 10, 0.0, 0.06);
        let unrounded = 1_000.0 * (1.0_f64 + 0.005).powi(120);
        assert_abs_diff_eq!(values[119], unrounded, epsilon = 0.01);
    }

    #[test]
    fn test_running_balance_is_not_rounded() {
        // Carrying the rounded cents forward would drift to a different final value
        let values = project(1_000.0, 10, 100.0, 0.08);
        assert_eq!(values[119], 20_636.21);

        let values = project(9_500.0, 30, 2_600.0, INVESTING_ANNUAL_RATE);
        assert_eq!(values[11], 42_874.10);
        assert_eq!(values[359], 4_004_656.90);
    }

    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let values = project(500.0, 2, 250.0, 0.0);
        assert_eq!(values[0], 750.0);
        assert_eq!(values[23], 500.0 + 24.0 * 250.0);
    }

    #[test]
    fn test_idempotent() {
        let a = project(9_500.0, 30, 2_600.0, INVESTING_ANNUAL_RATE);
        let b = project(9_500.0, 30, 2_600.0, INVESTING_ANNUAL_RATE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_higher_rate_dominates() {
        let high = project(9_500.0, 30, 2_600.0, INVESTING_ANNUAL_RATE);
        let low = project(9_500.0, 30, 2_600.0, SAVING_ANNUAL_RATE);
        assert!(high.iter().zip(&low).all(|(h, l)| h > l));

        // Capital only, no contribution
        let high = project(1_000.0, 10, 0.0, 0.05);
        let low = project(1_000.0, 10, 0.0, 0.04);
        assert!(high.iter().zip(&low).all(|(h, l)| h > l));
    }

    #[test]
    fn test_every_value_is_whole_cents() {
        for value in project(9_500.0, 50, 2_600.0, INVESTING_ANNUAL_RATE) {
            let cents = value * 100.0;
            assert_relative_eq!(cents, cents.round(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1_030.301), 1_030.30);
        assert_eq!(round_to_cents(2.675), 2.67); // binary value is below .675
        assert_eq!(round_to_cents(1.005), 1.0); // binary value is below .005
        assert_eq!(round_to_cents(0.125), 0.13); // exact tie rounds up
        assert_eq!(round_to_cents(10.375), 10.38);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(42.0), 42.0);
    }

    #[test]
    fn test_scenario_projection() {
        let params = InvestmentParameters::new(9_500.0, 1, 2_600.0);
        let proj = ScenarioProjection::run(Scenario::Investing, &params);
        assert_eq!(proj.monthly.len(), 12);
        assert_eq!(proj.yearly.len(), 1);
        assert_eq!(proj.final_total(), proj.monthly.last().copied());

        let params = InvestmentParameters::new(9_500.0, 0, 2_600.0);
        let empty = ScenarioProjection::run(Scenario::Saving, &params);
        assert!(empty.yearly.is_empty());
        assert_eq!(empty.final_total(), None);
    }
}
