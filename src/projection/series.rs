//! Projection output: headline amounts plus the year-by-year series

use serde::Serialize;
use std::io::Write;

/// Balance at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyPoint {
    pub year: u32,
    /// Principal and contributions with compounding applied
    pub amount_with_interest: f64,
    /// Principal plus raw contributions, no growth
    pub amount_without_interest: f64,
}

impl YearlyPoint {
    /// Interest earned up to this year
    pub fn interest_earned(&self) -> f64 {
        self.amount_with_interest - self.amount_without_interest
    }
}

/// Result of a single projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub final_amount: f64,
    pub final_amount_without_interest: f64,
    /// `final_amount - final_amount_without_interest`
    pub difference: f64,
    /// One point per year, 0 through the horizon inclusive
    pub yearly_series: Vec<YearlyPoint>,
}

impl ProjectionResult {
    /// Build from a complete series; the headline amounts are its last point.
    /// Returns None for an empty series.
    pub(crate) fn from_series(yearly_series: Vec<YearlyPoint>) -> Option<Self> {
        let last = *yearly_series.last()?;
        Some(Self {
            final_amount: last.amount_with_interest,
            final_amount_without_interest: last.amount_without_interest,
            difference: last.amount_with_interest - last.amount_without_interest,
            yearly_series,
        })
    }

    /// Projection horizon in years
    pub fn horizon_years(&self) -> u32 {
        self.yearly_series.last().map(|p| p.year).unwrap_or(0)
    }

    /// Write the yearly series as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for point in &self.yearly_series {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: u32, with: f64, without: f64) -> YearlyPoint {
        YearlyPoint {
            year,
            amount_with_interest: with,
            amount_without_interest: without,
        }
    }

    #[test]
    fn test_from_series_uses_last_point() {
        let result = ProjectionResult::from_series(vec![
            point(0, 100.0, 100.0),
            point(1, 110.0, 100.0),
            point(2, 121.0, 100.0),
        ])
        .unwrap();

        assert_eq!(result.final_amount, 121.0);
        assert_eq!(result.final_amount_without_interest, 100.0);
        assert_eq!(result.difference, 21.0);
        assert_eq!(result.horizon_years(), 2);
    }

    #[test]
    fn test_from_empty_series() {
        assert!(ProjectionResult::from_series(Vec::new()).is_none());
    }

    #[test]
    fn test_csv_output() {
        let result = ProjectionResult::from_series(vec![
            point(0, 1000.0, 1000.0),
            point(1, 1050.5, 1000.0),
        ])
        .unwrap();

        let mut buf = Vec::new();
        result.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,amount_with_interest,amount_without_interest");
        assert_eq!(lines[1], "0,1000.0,1000.0");
        assert_eq!(lines[2], "1,1050.5,1000.0");
        assert_eq!(lines.len(), 3);
    }
}
