//! Growth chart rendering
//!
//! Draws the yearly series as two lines (with and without interest) on a
//! gridded plot and encodes it as PNG, optionally base64 for embedding in a
//! `data:` URI.

mod canvas;
mod font;
mod scale;

use crate::projection::YearlyPoint;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use canvas::{Canvas, Color, BLACK, GRID, LEGEND_BORDER, WHITE};
use image::{ImageFormat, Rgb};
use scale::{amount_axis, year_axis, AmountLabels};
use std::io::Cursor;
use thiserror::Error;

pub const TITLE: &str = "Compound Interest Over Time Comparison";
pub const X_LABEL: &str = "Years";
pub const Y_LABEL: &str = "Amount in Dollars";
pub const WITH_INTEREST_LABEL: &str = "With Interest";
pub const WITHOUT_INTEREST_LABEL: &str = "Without Interest";

const WITH_INTEREST_COLOR: Color = Rgb([31, 119, 180]);
const WITHOUT_INTEREST_COLOR: Color = Rgb([255, 127, 14]);

const TITLE_SCALE: u32 = 3;
const LABEL_SCALE: u32 = 2;
const LINE_WIDTH: u32 = 2;
const MARKER_RADIUS: i64 = 4;
const TICK_LENGTH: i64 = 5;
const MIN_PLOT_SIZE: i64 = 40;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot chart an empty series")]
    EmptySeries,

    #[error("chart size {width}x{height} leaves no room for the plot area")]
    TooSmall { width: u32, height: u32 },

    #[error("failed to encode chart: {0}")]
    Encode(#[from] image::ImageError),
}

/// Output image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        // 10x5 inches at 100 dpi
        Self {
            width: 1000,
            height: 500,
        }
    }
}

/// Pixel rectangle of the plot area
struct PlotArea {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl PlotArea {
    fn width(&self) -> f64 {
        (self.right - self.left) as f64
    }

    fn height(&self) -> f64 {
        (self.bottom - self.top) as f64
    }
}

/// Render the series as PNG bytes
pub fn render_png(series: &[YearlyPoint], style: ChartStyle) -> Result<Vec<u8>, ChartError> {
    let image = draw(series, style)?.into_image();

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!(
        "rendered {}x{} chart for {} points ({} bytes)",
        style.width,
        style.height,
        series.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Render the series as base64-encoded PNG
pub fn render_base64(series: &[YearlyPoint], style: ChartStyle) -> Result<String, ChartError> {
    render_png(series, style).map(|png| STANDARD.encode(png))
}

fn draw(series: &[YearlyPoint], style: ChartStyle) -> Result<Canvas, ChartError> {
    let horizon = series.last().ok_or(ChartError::EmptySeries)?.year;

    let (data_min, data_max) = series.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, p| {
        (
            acc.0.min(p.amount_with_interest).min(p.amount_without_interest),
            acc.1.max(p.amount_with_interest).max(p.amount_without_interest),
        )
    });

    let x_axis = year_axis(horizon, 10);
    let y_axis = amount_axis(data_min, data_max, 6);
    let y_labels = AmountLabels::for_axis(&y_axis);
    let y_ticks: Vec<(f64, String)> = y_axis
        .ticks()
        .into_iter()
        .map(|v| (v, y_labels.label(v)))
        .collect();

    let widest_label = y_ticks
        .iter()
        .map(|(_, label)| font::text_width(label, LABEL_SCALE))
        .max()
        .unwrap_or(0) as i64;
    let label_height = (font::GLYPH_HEIGHT * LABEL_SCALE) as i64;

    // Margins: rotated y label, gap, tick labels, tick marks
    let plot = PlotArea {
        left: 16 + label_height + 16 + widest_label + TICK_LENGTH + 6,
        top: 60,
        right: style.width as i64 - 30,
        bottom: style.height as i64 - (TICK_LENGTH + 8 + label_height + 16 + label_height + 14),
    };
    if plot.right - plot.left < MIN_PLOT_SIZE || plot.bottom - plot.top < MIN_PLOT_SIZE {
        return Err(ChartError::TooSmall {
            width: style.width,
            height: style.height,
        });
    }

    let to_px = |year: f64, amount: f64| -> (f64, f64) {
        (
            plot.left as f64 + x_axis.fraction(year) * plot.width(),
            plot.bottom as f64 - y_axis.fraction(amount) * plot.height(),
        )
    };

    let mut canvas = Canvas::new(style.width, style.height, WHITE);

    // Title
    let title_scale = if font::text_width(TITLE, TITLE_SCALE) + 40 <= style.width {
        TITLE_SCALE
    } else {
        LABEL_SCALE
    };
    let title_width = font::text_width(TITLE, title_scale) as i64;
    canvas.text(TITLE, (style.width as i64 - title_width) / 2, 18, title_scale, BLACK);

    // Grid, ticks, and tick labels
    for year in x_axis.ticks() {
        let (x, _) = to_px(year, y_axis.min);
        let x = x.round() as i64;
        canvas.fill_rect(x, plot.top, x + 1, plot.bottom, GRID);
        canvas.fill_rect(x, plot.bottom, x + 1, plot.bottom + TICK_LENGTH, BLACK);

        let label = format!("{}", year.round() as i64);
        let w = font::text_width(&label, LABEL_SCALE) as i64;
        canvas.text(&label, x - w / 2, plot.bottom + TICK_LENGTH + 8, LABEL_SCALE, BLACK);
    }
    for (amount, label) in &y_ticks {
        let (_, y) = to_px(x_axis.min, *amount);
        let y = y.round() as i64;
        canvas.fill_rect(plot.left, y, plot.right, y + 1, GRID);
        canvas.fill_rect(plot.left - TICK_LENGTH, y, plot.left, y + 1, BLACK);

        let w = font::text_width(label, LABEL_SCALE) as i64;
        canvas.text(
            label,
            plot.left - TICK_LENGTH - 6 - w,
            y - label_height / 2,
            LABEL_SCALE,
            BLACK,
        );
    }
    canvas.stroke_rect(plot.left, plot.top, plot.right, plot.bottom, BLACK);

    // Axis labels
    let x_label_width = font::text_width(X_LABEL, LABEL_SCALE) as i64;
    canvas.text(
        X_LABEL,
        plot.left + (plot.right - plot.left - x_label_width) / 2,
        plot.bottom + TICK_LENGTH + 8 + label_height + 16,
        LABEL_SCALE,
        BLACK,
    );
    let y_label_width = font::text_width(Y_LABEL, LABEL_SCALE) as i64;
    canvas.text_vertical(
        Y_LABEL,
        16,
        plot.top + (plot.bottom - plot.top + y_label_width) / 2,
        LABEL_SCALE,
        BLACK,
    );

    // Series, without-interest first so the growth line sits on top
    let spacing = plot.width() / horizon.max(1) as f64;
    let markers = spacing >= (MARKER_RADIUS * 3) as f64;
    let lines: [(Color, fn(&YearlyPoint) -> f64); 2] = [
        (WITHOUT_INTEREST_COLOR, |p: &YearlyPoint| p.amount_without_interest),
        (WITH_INTEREST_COLOR, |p: &YearlyPoint| p.amount_with_interest),
    ];
    for (color, amount) in lines {
        let points: Vec<(f64, f64)> = series
            .iter()
            .map(|p| to_px(p.year as f64, amount(p)))
            .collect();
        for pair in points.windows(2) {
            canvas.line(pair[0], pair[1], LINE_WIDTH, color);
        }
        if markers || points.len() == 1 {
            for (x, y) in &points {
                canvas.fill_circle(x.round() as i64, y.round() as i64, MARKER_RADIUS, color);
            }
        }
    }

    draw_legend(&mut canvas, &plot, label_height);
    Ok(canvas)
}

fn draw_legend(canvas: &mut Canvas, plot: &PlotArea, label_height: i64) {
    let entries = [
        (WITH_INTEREST_COLOR, WITH_INTEREST_LABEL),
        (WITHOUT_INTEREST_COLOR, WITHOUT_INTEREST_LABEL),
    ];
    let swatch = 28;
    let padding = 10;
    let row_height = label_height + 10;
    let text_width = entries
        .iter()
        .map(|(_, label)| font::text_width(label, LABEL_SCALE))
        .max()
        .unwrap_or(0) as i64;

    let left = plot.left + 12;
    let top = plot.top + 12;
    let right = left + padding + swatch + 8 + text_width + padding;
    let bottom = top + padding + row_height * entries.len() as i64 - 10 + padding;

    canvas.fill_rect(left, top, right, bottom, WHITE);
    canvas.stroke_rect(left, top, right, bottom, LEGEND_BORDER);

    for (i, (color, label)) in entries.iter().enumerate() {
        let row_top = top + padding + i as i64 * row_height;
        let mid = (row_top + label_height / 2) as f64;
        let x0 = (left + padding) as f64;
        canvas.line((x0, mid), (x0 + swatch as f64, mid), LINE_WIDTH, *color);
        canvas.fill_circle(left + padding + swatch / 2, mid as i64, MARKER_RADIUS, *color);
        canvas.text(label, left + padding + swatch + 8, row_top, LABEL_SCALE, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{compute, CompoundingFrequency, ProjectionInput};
    use base64::Engine as _;
    use image::GenericImageView;

    fn sample_series(years: u32) -> Vec<YearlyPoint> {
        compute(&ProjectionInput {
            initial_deposit: 1000.0,
            interest_rate: 0.05,
            contribution: 100.0,
            compounding_frequency: CompoundingFrequency::Monthly,
            time_period_years: years,
        })
        .unwrap()
        .yearly_series
    }

    fn has_color(image: &image::RgbImage, color: Color) -> bool {
        image.pixels().any(|p| *p == color)
    }

    #[test]
    fn test_render_png_dimensions() {
        let png = render_png(&sample_series(10), ChartStyle::default()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 1000);
        assert_eq!(decoded.height(), 500);
    }

    #[test]
    fn test_both_lines_drawn() {
        let image = draw(&sample_series(20), ChartStyle::default()).unwrap().into_image();
        assert!(has_color(&image, WITH_INTEREST_COLOR));
        assert!(has_color(&image, WITHOUT_INTEREST_COLOR));
        // Corner stays background
        assert_eq!(*image.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_single_point_series() {
        let image = draw(&sample_series(0), ChartStyle::default()).unwrap().into_image();
        assert!(has_color(&image, WITH_INTEREST_COLOR));
    }

    #[test]
    fn test_empty_series() {
        assert!(matches!(
            render_png(&[], ChartStyle::default()),
            Err(ChartError::EmptySeries)
        ));
    }

    #[test]
    fn test_too_small() {
        let style = ChartStyle { width: 120, height: 80 };
        assert!(matches!(
            render_png(&sample_series(5), style),
            Err(ChartError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_custom_size() {
        let style = ChartStyle { width: 640, height: 360 };
        let png = render_png(&sample_series(5), style).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (640, 360));
    }

    #[test]
    fn test_base64_output() {
        let encoded = render_base64(&sample_series(3), ChartStyle::default()).unwrap();
        // PNG signature encodes to this prefix
        assert!(encoded.starts_with("iVBORw0KGgo"));
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert!(image::load_from_memory(&decoded).is_ok());
    }

    #[test]
    fn test_astronomical_growth_renders() {
        // 1000 doubling yearly for 300 years ends near 2e93
        let series = compute(&ProjectionInput {
            initial_deposit: 1000.0,
            interest_rate: 1.0,
            contribution: 0.0,
            compounding_frequency: CompoundingFrequency::Annual,
            time_period_years: 300,
        })
        .unwrap()
        .yearly_series;
        assert!(series.last().unwrap().amount_with_interest > 1e93);

        let png = render_png(&series, ChartStyle::default()).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1000, 500));
    }

    #[test]
    fn test_deposit_near_max_float_renders() {
        let series = compute(&ProjectionInput {
            initial_deposit: 1.7e308,
            interest_rate: 0.05,
            contribution: 0.0,
            compounding_frequency: CompoundingFrequency::Annual,
            time_period_years: 0,
        })
        .unwrap()
        .yearly_series;

        let image = draw(&series, ChartStyle::default()).unwrap().into_image();
        assert!(has_color(&image, WITH_INTEREST_COLOR));
    }
}
