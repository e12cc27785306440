//! Reduce monthly series to one point per year and build year categories

use crate::projection::MONTHS_PER_YEAR;

/// Number of intervals between axis ticks
pub const TICK_INTERVALS: usize = 3;

/// Keep the balance at the end of each completed year
///
/// Picks months 12, 24, 36, ... (indices 11, 23, 35, ...). A trailing partial
/// year is dropped. `years` only caps the result: at most `years` values are
/// returned, so a series longer than the horizon is truncated, and a shorter
/// one yields only its completed years.
pub fn reduce_to_yearly(monthly: &[f64], years: u32) -> Vec<f64> {
    monthly
        .chunks_exact(MONTHS_PER_YEAR)
        .map(|year| year[MONTHS_PER_YEAR - 1])
        .take(years as usize)
        .collect()
}

/// Calendar-year categories: `current_year ..= current_year + years`
pub fn year_labels(current_year: i32, years: u32) -> Vec<String> {
    (0..=years)
        .map(|offset| (i64::from(current_year) + i64::from(offset)).to_string())
        .collect()
}

/// Four evenly spread tick years ending at the horizon
///
/// The spacing is `years / 3` rounded down; the last tick is always
/// `current_year + years`.
pub fn tick_years(current_year: i32, years: u32) -> [i64; TICK_INTERVALS + 1] {
    let start = i64::from(current_year);
    let interval = i64::from(years / TICK_INTERVALS as u32);
    [start, start + interval, start + 2 * interval, start + i64::from(years)]
}
