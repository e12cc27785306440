//! Chart input for the external area-chart renderer
//!
//! Everything here is recomputed from scratch on each parameter change:
//! both scenarios are projected, reduced to yearly points and labelled.

mod format;
mod reducer;

pub use format::{category_tooltip, format_number, legend_text, to_fixed, NumberFormat};
pub use reducer::{reduce_to_yearly, tick_years, year_labels, TICK_INTERVALS};

use crate::error::Result;
use crate::params::InvestmentParameters;
use crate::projection::ScenarioProjection;
use crate::scenario::Scenario;
use log::debug;
use serde::Serialize;

/// One named data series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    #[serde(skip)]
    pub scenario: Scenario,
    /// One value per completed year
    pub data: Vec<f64>,
    /// Last yearly value, used by the legend
    pub total: Option<f64>,
}

/// Categories, series and palette handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    /// Year labels, `years + 1` of them
    pub categories: Vec<String>,
    pub tick_years: Vec<i64>,
    pub series: Vec<ChartSeries>,
    pub colors: Vec<&'static str>,
}

/// Project both scenarios and assemble the chart input
pub fn build_chart(params: &InvestmentParameters, current_year: i32) -> ChartInput {
    debug!(
        "Building chart: capital={}, years={}, monthly={}, start={}",
        params.initial_capital, params.years, params.monthly_contribution, current_year
    );

    let series: Vec<ChartSeries> = Scenario::ALL
        .iter()
        .map(|&scenario| {
            let projection = ScenarioProjection::run(scenario, params);
            ChartSeries {
                name: scenario.label().to_string(),
                scenario,
                total: projection.final_total(),
                data: projection.yearly,
            }
        })
        .collect();

    ChartInput {
        categories: year_labels(current_year, params.years),
        tick_years: tick_years(current_year, params.years).to_vec(),
        series,
        colors: Scenario::ALL.iter().map(|s| s.color()).collect(),
    }
}

impl ChartInput {
    /// Series for a scenario
    pub fn series_for(&self, scenario: Scenario) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.scenario == scenario)
    }

    /// Final total for a scenario, `None` when no year completed
    pub fn total(&self, scenario: Scenario) -> Option<f64> {
        self.series_for(scenario).and_then(|s| s.total)
    }

    /// Legend entry for a series name; unknown names pass through unchanged
    pub fn legend_text_for_name(&self, series_name: &str, fmt: &NumberFormat) -> String {
        match Scenario::from_label(series_name) {
            Some(scenario) => fmt.legend_text(scenario, self.total(scenario)),
            None => series_name.to_string(),
        }
    }

    /// Legend entries in series order
    pub fn legend_texts(&self, fmt: &NumberFormat) -> Vec<String> {
        self.series
            .iter()
            .map(|s| fmt.legend_text(s.scenario, s.total))
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
