//! Run both scenarios for every slider combination and write the totals as CSV

use anyhow::{Context, Result};
use clap::Parser;
use growth_projection::sweep::{run_sweep, slider_grid, write_sweep_csv};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "sweep_grid", about = "Project every slider combination")]
struct Args {
    /// Output CSV path
    #[arg(long, short, default_value = "growth_sweep.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let grid = slider_grid();
    println!("Projecting {} combinations...", grid.len());

    let rows = run_sweep(&grid);
    println!("Projections complete in {:?}", start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_sweep_csv(&rows, file)?;
    println!("Output written to {}", args.output.display());

    if let Some(best) = rows
        .iter()
        .filter_map(|r| r.difference.map(|d| (r, d)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
    {
        println!(
            "Largest gap: {:.2} (years={}, capital={}, monthly={})",
            best.1, best.0.years, best.0.initial_capital, best.0.monthly_contribution
        );
    }

    Ok(())
}
