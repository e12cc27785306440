//! Yearly report: one row per completed year with both scenario balances,
//! as CSV, JSON or an aligned text table
//!
//! Year label k+1 is paired with yearly value k, so each balance is shown
//! against the year it closes.

use crate::chart::{ChartInput, NumberFormat};
use crate::error::Result;
use crate::scenario::Scenario;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Balances at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyRow {
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Inversión")]
    pub investing: f64,
    #[serde(rename = "Ahorro")]
    pub saving: f64,
}

/// Flatten the chart into rows
pub fn yearly_rows(chart: &ChartInput) -> Vec<YearlyRow> {
    let investing = chart.series_for(Scenario::Investing).map(|s| s.data.as_slice()).unwrap_or_default();
    let saving = chart.series_for(Scenario::Saving).map(|s| s.data.as_slice()).unwrap_or_default();

    chart
        .categories
        .iter()
        .skip(1)
        .zip(investing.iter().zip(saving))
        .map(|(year, (&investing, &saving))| YearlyRow {
            year: year.clone(),
            investing,
            saving,
        })
        .collect()
}

/// Write rows as CSV with a header line
pub fn write_csv<W: Write>(rows: &[YearlyRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(rows: &[YearlyRow], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv(rows, file)
}

/// Write rows as a pretty-printed JSON array
pub fn write_json<W: Write>(rows: &[YearlyRow], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    Ok(())
}

/// Aligned text table with localized amounts
pub fn render_table(rows: &[YearlyRow], fmt: &NumberFormat) -> String {
    let mut out = format!(
        "{:<6} {:>18} {:>18}\n",
        "Year",
        Scenario::Investing.label(),
        Scenario::Saving.label()
    );
    for row in rows {
        out.push_str(&format!(
            "{:<6} {:>18} {:>18}\n",
            row.year,
            format!("${}", fmt.format(row.investing)),
            format!("${}", fmt.format(row.saving)),
        ));
    }
    out
}
