//! Sweep every slider combination and compare final totals
//!
//! Each grid point is independent, so the sweep runs in parallel. Output order
//! follows the grid: years, then initial capital, then monthly contribution.

use crate::error::Result;
use crate::params::{
    InvestmentParameters, INITIAL_CAPITAL_RANGE, MONTHLY_CONTRIBUTION_RANGE, YEARS_RANGE,
};
use crate::projection::ScenarioProjection;
use crate::scenario::Scenario;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Final totals for one grid point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub years: u32,
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub investing_total: Option<f64>,
    pub saving_total: Option<f64>,
    /// Investing minus saving
    pub difference: Option<f64>,
}

/// Every combination of slider positions
pub fn slider_grid() -> Vec<InvestmentParameters> {
    let years = YEARS_RANGE.positions();
    let capitals = INITIAL_CAPITAL_RANGE.positions();
    let contributions = MONTHLY_CONTRIBUTION_RANGE.positions();

    let mut grid = Vec::with_capacity(years.len() * capitals.len() * contributions.len());
    for &y in &years {
        for &capital in &capitals {
            for &contribution in &contributions {
                grid.push(InvestmentParameters::new(capital, y as u32, contribution));
            }
        }
    }
    grid
}

/// Project both scenarios for each grid point
pub fn run_sweep(grid: &[InvestmentParameters]) -> Vec<SweepRow> {
    debug!("Sweeping {} grid points", grid.len());
    let rows: Vec<SweepRow> = grid.par_iter().map(sweep_row).collect();
    info!("Sweep complete: {} rows", rows.len());
    rows
}

fn sweep_row(params: &InvestmentParameters) -> SweepRow {
    let investing_total = ScenarioProjection::run(Scenario::Investing, params).final_total();
    let saving_total = ScenarioProjection::run(Scenario::Saving, params).final_total();
    let difference = investing_total.zip(saving_total).map(|(i, s)| i - s);

    SweepRow {
        years: params.years,
        initial_capital: params.initial_capital,
        monthly_contribution: params.monthly_contribution,
        investing_total,
        saving_total,
        difference,
    }
}

/// Write sweep rows as CSV with a header line
pub fn write_sweep_csv<W: Write>(rows: &[SweepRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
