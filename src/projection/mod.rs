//! Projection engine for the investing and saving growth curves

mod engine;

pub use engine::{project, round_to_cents, ScenarioProjection};

// ============================================================================
// Scenario Annual Rates
// ============================================================================
// Nominal annual rates, compounded monthly at rate/12.
// Neither is user-configurable.

/// Annual rate for the investing scenario (8%)
pub const INVESTING_ANNUAL_RATE: f64 = 0.08;

/// Annual rate for the saving scenario (2%)
pub const SAVING_ANNUAL_RATE: f64 = 0.02;

/// Months per projection year
pub const MONTHS_PER_YEAR: usize = 12;
