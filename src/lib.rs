//! Growth Projection - compound-growth engine for the investing vs saving comparison chart
//!
//! This library provides:
//! - Monthly compounding projections with per-month cent rounding
//! - Yearly reduction of monthly series and calendar-year labels
//! - Legend, tooltip and axis text for the two named scenarios
//! - Chart input export (JSON) and yearly reports (CSV / text)
//! - Parallel sweeps over every slider combination

pub mod error;
pub mod params;
pub mod scenario;
pub mod projection;
pub mod chart;
pub mod report;
pub mod sweep;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use params::{InvestmentParameters, SliderRange};
pub use scenario::Scenario;
pub use projection::{project, round_to_cents, ScenarioProjection};
pub use chart::{build_chart, ChartInput, ChartSeries, NumberFormat};
