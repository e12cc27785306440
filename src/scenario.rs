//! The two named growth curves compared on the chart

use crate::projection::{INVESTING_ANNUAL_RATE, SAVING_ANNUAL_RATE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Growth scenario, in chart series order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Higher-rate curve ("Inversión")
    Investing,
    /// Lower-rate curve ("Ahorro")
    Saving,
}

impl Scenario {
    /// Both scenarios in series order
    pub const ALL: [Scenario; 2] = [Scenario::Investing, Scenario::Saving];

    /// Display label used as the series name
    pub fn label(self) -> &'static str {
        match self {
            Scenario::Investing => "Inversión",
            Scenario::Saving => "Ahorro",
        }
    }

    /// Fixed nominal annual rate
    pub fn annual_rate(self) -> f64 {
        match self {
            Scenario::Investing => INVESTING_ANNUAL_RATE,
            Scenario::Saving => SAVING_ANNUAL_RATE,
        }
    }

    /// Series colour in the chart palette
    pub fn color(self) -> &'static str {
        match self {
            Scenario::Investing => "#00C9A7",
            Scenario::Saving => "#f1c40f",
        }
    }

    /// Look up a scenario by its display label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_rates() {
        assert_eq!(Scenario::Investing.label(), "Inversión");
        assert_eq!(Scenario::Saving.label(), "Ahorro");
        assert_eq!(Scenario::Investing.annual_rate(), 0.08);
        assert_eq!(Scenario::Saving.annual_rate(), 0.02);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Scenario::from_label("Inversión"), Some(Scenario::Investing));
        assert_eq!(Scenario::from_label("Ahorro"), Some(Scenario::Saving));
        assert_eq!(Scenario::from_label("Inversion"), None);
        assert_eq!(Scenario::from_label(""), None);
    }

    #[test]
    fn test_palette_order() {
        let colors: Vec<&str> = Scenario::ALL.iter().map(|s| s.color()).collect();
        assert_eq!(colors, vec!["#00C9A7", "#f1c40f"]);
    }
}
