//! Axis ranges, tick placement, and tick labels

use crate::format;

/// Most ticks an axis will produce
const MAX_TICKS: usize = 50;

/// Resolved axis: bounds snapped to whole tick steps where they stay finite
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// Tick positions from `min` up to `max`, at most `MAX_TICKS` of them
    pub fn ticks(&self) -> Vec<f64> {
        // Divide before subtracting so spans near f64::MAX stay finite
        let steps = (self.max / self.step - self.min / self.step + 1e-6).floor();
        let count = if steps.is_finite() && steps > 0.0 {
            (steps as usize).min(MAX_TICKS - 1)
        } else {
            0
        };
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }

    /// Position of `value` as a fraction of the axis span
    pub fn fraction(&self, value: f64) -> f64 {
        (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
    }
}

/// Round a raw step up to 1, 2, 2.5, 5, or 10 times a power of ten
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powf(raw.log10().floor());
    let fraction = raw / base;
    let nice: f64 = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * base;
    if step.is_finite() {
        step
    } else {
        raw
    }
}

/// Axis over dollar amounts, always including zero
pub fn amount_axis(data_min: f64, data_max: f64, target_ticks: u32) -> Axis {
    let lo = data_min.min(0.0);
    let mut hi = data_max.max(0.0);
    if hi - lo <= f64::EPSILON * hi.abs().max(1.0) {
        hi = lo + 1.0;
    }

    let target = target_ticks.max(1) as f64;
    let step = nice_step(hi / target - lo / target);

    // Snapping outward can overflow near f64::MAX, keep the data bound then
    let snap = |bound: f64, snapped: f64| if snapped.is_finite() { snapped } else { bound };
    Axis {
        min: snap(lo, (lo / step).floor() * step),
        max: snap(hi, (hi / step).ceil() * step),
        step,
    }
}

/// Axis over whole years `0..=horizon`, integer steps only
pub fn year_axis(horizon: u32, target_ticks: u32) -> Axis {
    let span = horizon.max(1) as f64;
    let mut step = nice_step(span / target_ticks.max(1) as f64).max(1.0);
    if step.fract() != 0.0 {
        step = step.floor();
    }
    Axis {
        min: 0.0,
        max: (span / step).ceil() * step,
        step,
    }
}

/// Axes at or above this magnitude label ticks in exponent form
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Labels for amount ticks: M/B/T suffixes for large axes, exponent form
/// beyond trillions so label width stays bounded
pub struct AmountLabels {
    divisor: f64,
    suffix: &'static str,
    decimals: usize,
    scientific: bool,
}

impl AmountLabels {
    pub fn for_axis(axis: &Axis) -> Self {
        let magnitude = axis.max.abs().max(axis.min.abs());
        let scientific = magnitude >= SCIENTIFIC_THRESHOLD;
        let (divisor, suffix) = if scientific {
            // Mantissa of the largest tick, decimals sized against it
            (10f64.powf(magnitude.log10().floor()), "")
        } else if magnitude >= 1e12 {
            (1e12, "T")
        } else if magnitude >= 1e9 {
            (1e9, "B")
        } else if magnitude >= 1e6 {
            (1e6, "M")
        } else {
            (1.0, "")
        };

        // Fewest decimals that still show the step exactly
        let scaled_step = axis.step / divisor;
        let decimals = (0..=3)
            .find(|&d| {
                let shifted = scaled_step * 10f64.powi(d as i32);
                (shifted - shifted.round()).abs() < 1e-6
            })
            .unwrap_or(3);

        Self {
            divisor,
            suffix,
            decimals,
            scientific,
        }
    }

    pub fn label(&self, value: f64) -> String {
        if self.scientific {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}${:.*e}", sign, self.decimals, value.abs())
        } else {
            format!("{}{}", format::currency(value / self.divisor, self.decimals), self.suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nice_step() {
        assert_relative_eq!(nice_step(0.7), 1.0);
        assert_relative_eq!(nice_step(1.0), 1.0);
        assert_relative_eq!(nice_step(1.3), 2.0);
        assert_relative_eq!(nice_step(2.2), 2.5);
        assert_relative_eq!(nice_step(3.0), 5.0);
        assert_relative_eq!(nice_step(7.0), 10.0);
        assert_relative_eq!(nice_step(230.0), 250.0);
        assert_relative_eq!(nice_step(0.03), 0.05, epsilon = 1e-12);
        assert_relative_eq!(nice_step(0.0), 1.0);
        assert_relative_eq!(nice_step(f64::NAN), 1.0);
    }

    #[test]
    fn test_amount_axis_covers_data() {
        let axis = amount_axis(1000.0, 16387.93, 6);
        assert_eq!(axis.min, 0.0);
        assert!(axis.max >= 16387.93);
        assert_relative_eq!(axis.step, 5000.0);
        assert_eq!(axis.ticks(), vec![0.0, 5000.0, 10000.0, 15000.0, 20000.0]);
    }

    #[test]
    fn test_amount_axis_flat_data() {
        let axis = amount_axis(0.0, 0.0, 6);
        assert!(axis.max > axis.min);
        assert_eq!(axis.ticks().first(), Some(&0.0));
    }

    #[test]
    fn test_year_axis() {
        let axis = year_axis(10, 10);
        assert_eq!(axis.step, 1.0);
        assert_eq!(axis.max, 10.0);
        assert_eq!(axis.ticks().len(), 11);

        let axis = year_axis(30, 10);
        assert_eq!(axis.step, 5.0);
        assert_eq!(axis.max, 30.0);

        // 2.5 is not a whole year
        let axis = year_axis(22, 10);
        assert_eq!(axis.step, 2.0);
        assert_eq!(axis.max, 22.0);

        // Zero horizon still spans one year
        let axis = year_axis(0, 10);
        assert_eq!(axis.max, 1.0);
    }

    #[test]
    fn test_fraction() {
        let axis = Axis { min: 0.0, max: 200.0, step: 50.0 };
        assert_relative_eq!(axis.fraction(50.0), 0.25);
        assert_relative_eq!(axis.fraction(200.0), 1.0);
    }

    #[test]
    fn test_amount_labels() {
        let axis = amount_axis(0.0, 18000.0, 6);
        let labels = AmountLabels::for_axis(&axis);
        assert_eq!(labels.label(5000.0), "$5,000");

        let axis = Axis { min: 0.0, max: 3_000_000.0, step: 500_000.0 };
        let labels = AmountLabels::for_axis(&axis);
        assert_eq!(labels.label(1_500_000.0), "$1.5M");
        assert_eq!(labels.label(0.0), "$0.0M");

        let axis = Axis { min: 0.0, max: 1.0, step: 0.25 };
        let labels = AmountLabels::for_axis(&axis);
        assert_eq!(labels.label(0.75), "$0.75");
    }

    #[test]
    fn test_amount_axis_near_max_float() {
        let axis = amount_axis(1.7e308, 1.7e308, 6);
        assert!(axis.max.is_finite());
        assert!(axis.max >= 1.7e308);

        let ticks = axis.ticks();
        assert!(!ticks.is_empty() && ticks.len() <= MAX_TICKS);
        assert!(ticks.iter().all(|t| t.is_finite() && *t <= axis.max));
        assert_relative_eq!(axis.fraction(1.7e308), 1.0, epsilon = 0.2);
    }

    #[test]
    fn test_ticks_capped() {
        let axis = Axis { min: 0.0, max: 1e9, step: 1.0 };
        assert_eq!(axis.ticks().len(), MAX_TICKS);
    }

    #[test]
    fn test_scientific_labels() {
        let axis = Axis { min: 0.0, max: 2.5e93, step: 5e92 };
        let labels = AmountLabels::for_axis(&axis);
        assert_eq!(labels.label(5e92), "$5.0e92");
        assert_eq!(labels.label(1.5e93), "$1.5e93");
        assert_eq!(labels.label(0.0), "$0.0e0");

        // Width no longer grows with magnitude
        let axis = amount_axis(0.0, 1.7e308, 6);
        let labels = AmountLabels::for_axis(&axis);
        assert!(axis.ticks().iter().all(|t| labels.label(*t).len() <= 10));
    }
}
