//! Project the investing and saving scenarios for one set of parameters
//!
//! Prints legends and a yearly table, or exports the chart input as JSON or
//! the yearly rows as JSON or CSV.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, ValueEnum};
use growth_projection::{
    build_chart,
    chart::NumberFormat,
    report::{render_table, write_csv, write_csv_file, write_json, yearly_rows},
    InvestmentParameters,
};
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Legends plus an aligned yearly table
    Table,
    /// Chart input for the renderer
    Json,
    /// Yearly rows as JSON
    Report,
    /// Yearly rows as CSV
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "project_growth", about = "Compare investing vs saving growth")]
struct Args {
    /// JSON parameter file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Initial capital (USD)
    #[arg(long)]
    capital: Option<f64>,

    /// Monthly contribution (USD)
    #[arg(long)]
    contribution: Option<f64>,

    /// First calendar year on the axis (default: current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Fail on values the sliders cannot produce instead of snapping them
    #[arg(long, conflicts_with = "raw")]
    strict: bool,

    /// Use the values as given, without snapping to slider steps
    #[arg(long)]
    raw: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Use "." for thousands and "," for decimals
    #[arg(long)]
    continental: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => InvestmentParameters::from_json_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => InvestmentParameters::default(),
    };
    if let Some(years) = args.years {
        params.years = years;
    }
    if let Some(capital) = args.capital {
        params.initial_capital = capital;
    }
    if let Some(contribution) = args.contribution {
        params.monthly_contribution = contribution;
    }

    if args.strict {
        params.validate().context("Invalid parameters")?;
    } else if !args.raw {
        let snapped = params.snapped();
        if snapped != params {
            info!("Snapped {:?} to {:?}", params, snapped);
        }
        params = snapped;
    }

    let start_year = args.start_year.unwrap_or_else(|| Local::now().year());
    let fmt = if args.continental {
        NumberFormat::continental()
    } else {
        NumberFormat::default()
    };

    let chart = build_chart(&params, start_year);
    let rows = yearly_rows(&chart);

    if let (OutputFormat::Csv, Some(path)) = (args.format, &args.output) {
        write_csv_file(&rows, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} rows to {}", rows.len(), path.display());
        return Ok(());
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{} | {} | {}",
                params.years_caption(),
                params.initial_capital_caption(),
                params.monthly_contribution_caption()
            )?;
            for legend in chart.legend_texts(&fmt) {
                writeln!(out, "{}", legend)?;
            }
            writeln!(out)?;
            write!(out, "{}", render_table(&rows, &fmt))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", chart.to_json_pretty()?)?;
        }
        OutputFormat::Report => {
            write_json(&rows, &mut out)?;
        }
        OutputFormat::Csv => {
            write_csv(&rows, &mut out)?;
        }
    }
    out.flush()?;

    Ok(())
}
