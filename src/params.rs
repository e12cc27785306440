//! Investment parameters and the slider ranges that bound them
//!
//! The projection engine accepts any finite inputs. The ranges here describe
//! what the interactive controls allow, and are used to snap CLI input and to
//! enumerate the grid for sweeps.

use crate::error::{ProjectionError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tolerance when checking that a value sits on a slider step
const STEP_EPSILON: f64 = 1e-9;

/// Range-constrained numeric control: min, max and step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Caption shown above the control
    pub caption: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Investment horizon in whole years
pub const YEARS_RANGE: SliderRange = SliderRange {
    caption: "Tiempo de Inversión",
    min: 10.0,
    max: 50.0,
    step: 5.0,
};

/// Initial capital in USD
pub const INITIAL_CAPITAL_RANGE: SliderRange = SliderRange {
    caption: "Capital Inicial",
    min: 1_000.0,
    max: 10_000.0,
    step: 500.0,
};

/// Monthly contribution in USD
pub const MONTHLY_CONTRIBUTION_RANGE: SliderRange = SliderRange {
    caption: "Inversión Mensual",
    min: 100.0,
    max: 5_000.0,
    step: 100.0,
};

impl SliderRange {
    /// Clamp into [min, max] and round to the nearest step
    ///
    /// NaN snaps to `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// True when the value is inside the range and on a step
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max && self.is_on_step(value)
    }

    /// Number of selectable positions
    pub fn position_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Every selectable value, ascending
    pub fn positions(&self) -> Vec<f64> {
        (0..self.position_count())
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    fn is_on_step(&self, value: f64) -> bool {
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < STEP_EPSILON
    }

    fn check(&self, field: &'static str, value: f64) -> Result<()> {
        if !(value >= self.min && value <= self.max) {
            return Err(ProjectionError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if !self.is_on_step(value) {
            return Err(ProjectionError::OffStep {
                field,
                value,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// The three user-controlled inputs of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Starting balance (USD)
    #[serde(default = "default_initial_capital")]
    pub initial_capital: f64,

    /// Horizon in whole years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Amount added at the start of every month (USD)
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,
}

fn default_initial_capital() -> f64 { 9_500.0 }
fn default_years() -> u32 { 30 }
fn default_monthly_contribution() -> f64 { 2_600.0 }

impl Default for InvestmentParameters {
    fn default() -> Self {
        Self {
            initial_capital: default_initial_capital(),
            years: default_years(),
            monthly_contribution: default_monthly_contribution(),
        }
    }
}

impl InvestmentParameters {
    pub fn new(initial_capital: f64, years: u32, monthly_contribution: f64) -> Self {
        Self {
            initial_capital,
            years,
            monthly_contribution,
        }
    }

    /// Parse parameters from JSON; missing fields take the defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        debug!("Parsed parameters: {:?}", params);
        Ok(params)
    }

    /// Load parameters from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading parameters from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Copy with every field snapped onto its slider
    pub fn snapped(&self) -> Self {
        Self {
            initial_capital: INITIAL_CAPITAL_RANGE.snap(self.initial_capital),
            years: YEARS_RANGE.snap(self.years as f64) as u32,
            monthly_contribution: MONTHLY_CONTRIBUTION_RANGE.snap(self.monthly_contribution),
        }
    }

    /// Reject values the sliders could not produce
    pub fn validate(&self) -> Result<()> {
        YEARS_RANGE.check("years", self.years as f64)?;
        INITIAL_CAPITAL_RANGE.check("initial_capital", self.initial_capital)?;
        MONTHLY_CONTRIBUTION_RANGE.check("monthly_contribution", self.monthly_contribution)?;
        Ok(())
    }

    /// Text under the horizon slider, e.g. "30 Años"
    pub fn years_caption(&self) -> String {
        format!("{} Años", self.years)
    }

    /// Text under the capital slider, e.g. "$9500 USD"
    pub fn initial_capital_caption(&self) -> String {
        format!("${} USD", self.initial_capital)
    }

    /// Text under the contribution slider, e.g. "$2600 USD"
    pub fn monthly_contribution_caption(&self) -> String {
        format!("${} USD", self.monthly_contribution)
    }
}
