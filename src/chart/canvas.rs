//! Raster drawing primitives over an RGB image buffer

use super::font;
use image::{Rgb, RgbImage};

pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);
pub const BLACK: Color = Rgb([0, 0, 0]);
pub const GRID: Color = Rgb([222, 222, 222]);
pub const LEGEND_BORDER: Color = Rgb([204, 204, 204]);

/// Drawing surface; every primitive clips to the image bounds
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn put(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Axis-aligned filled rectangle, `x0..x1` by `y0..y1` (exclusive)
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        for y in y0.max(0)..y1.min(self.height() as i64) {
            for x in x0.max(0)..x1.min(self.width() as i64) {
                self.put(x, y, color);
            }
        }
    }

    /// One-pixel rectangle outline with inclusive corners
    pub fn stroke_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        self.fill_rect(x0, y0, x1 + 1, y0 + 1, color);
        self.fill_rect(x0, y1, x1 + 1, y1 + 1, color);
        self.fill_rect(x0, y0, x0 + 1, y1 + 1, color);
        self.fill_rect(x1, y0, x1 + 1, y1 + 1, color);
    }

    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Color) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Straight line of the given stroke width between two float points
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), width: u32, color: Color) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;
        let half = (width as i64 - 1) / 2;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = (from.0 + dx * t).round() as i64;
            let y = (from.1 + dy * t).round() as i64;
            self.fill_rect(x - half, y - half, x - half + width as i64, y - half + width as i64, color);
        }
    }

    /// Left-to-right text with its top-left corner at (x, y)
    pub fn text(&mut self, text: &str, x: i64, y: i64, scale: u32, color: Color) {
        let s = scale as i64;
        for (i, ch) in text.chars().enumerate() {
            let glyph = font::glyph(ch);
            let origin = x + i as i64 * font::ADVANCE as i64 * s;
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if font::is_set(glyph, col, row) {
                        let px = origin + col as i64 * s;
                        let py = y + row as i64 * s;
                        self.fill_rect(px, py, px + s, py + s, color);
                    }
                }
            }
        }
    }

    /// Text rotated 90 degrees counter-clockwise, reading bottom-to-top.
    /// (x, y) is the bottom-left corner of the rotated run.
    pub fn text_vertical(&mut self, text: &str, x: i64, y: i64, scale: u32, color: Color) {
        let s = scale as i64;
        for (i, ch) in text.chars().enumerate() {
            let glyph = font::glyph(ch);
            let origin = y - i as i64 * font::ADVANCE as i64 * s;
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if font::is_set(glyph, col, row) {
                        // Glyph columns run up the image, rows run right
                        let px = x + row as i64 * s;
                        let py = origin - (col as i64 + 1) * s;
                        self.fill_rect(px, py, px + s, py + s, color);
                    }
                }
            }
        }
    }
}
