//! Chart descriptions handed to renderers

use descriptive_core::{Error, Result};
use descriptive_histogram::Histogram;
use std::fmt;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidParameter(format!(
                "colour '{hex}' is not of the form #RRGGBB"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                Error::InvalidParameter(format!("colour '{hex}' has invalid hex digits"))
            })
        };
        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Visual configuration for a histogram chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Bar fill colour
    pub fill: Rgb,
    /// Fraction of each bucket's width covered by its bar, in (0, 1]
    pub bar_width_ratio: f64,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            fill: Rgb(0xF2, 0xAB, 0x6D),
            bar_width_ratio: 0.85,
            width: 800,
            height: 600,
        }
    }
}

impl ChartStyle {
    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_bar_width_ratio(mut self, ratio: f64) -> Result<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "bar width ratio {ratio} must be in (0, 1]"
            )));
        }
        self.bar_width_ratio = ratio;
        Ok(self)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A bar-style histogram with title and axis labels
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub histogram: Histogram,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub style: ChartStyle,
}

impl HistogramChart {
    pub fn new(histogram: Histogram, title: impl Into<String>) -> Self {
        Self {
            histogram,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            style: ChartStyle::default(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Extent of each bar along the x axis, narrowed by the style's width ratio
    pub fn bar_extents(&self) -> Vec<(f64, f64)> {
        let ratio = self.style.bar_width_ratio;
        self.histogram
            .bins()
            .iter()
            .map(|bin| {
                let pad = bin.width() * (1.0 - ratio) / 2.0;
                (bin.left + pad, bin.right - pad)
            })
            .collect()
    }

    /// A file-system friendly name derived from the title
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        let trimmed = slug.trim_end_matches('-');
        if trimmed.is_empty() {
            "histogram".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use descriptive_histogram::fixed_histogram;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::from_hex("#F2AB6D").unwrap(), Rgb(0xF2, 0xAB, 0x6D));
        assert_eq!(Rgb::from_hex("00ff10").unwrap(), Rgb(0, 255, 16));
        assert_eq!(Rgb(0xF2, 0xAB, 0x6D).to_string(), "#F2AB6D");
        assert!(Rgb::from_hex("#F2AB").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_style_validation() {
        let style = ChartStyle::default();
        assert!(style.with_bar_width_ratio(0.0).is_err());
        assert!(style.with_bar_width_ratio(1.5).is_err());
        assert!(style.with_bar_width_ratio(f64::NAN).is_err());
        assert_eq!(style.with_bar_width_ratio(1.0).unwrap().bar_width_ratio, 1.0);
    }

    #[test]
    fn test_bar_extents() {
        let hist = fixed_histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();
        let chart = HistogramChart::new(hist, "t")
            .with_style(ChartStyle::default().with_bar_width_ratio(0.5).unwrap());
        let bars = chart.bar_extents();

        assert_eq!(bars.len(), 2);
        assert_relative_eq!(bars[0].0, 0.5);
        assert_relative_eq!(bars[0].1, 1.5);
        assert_relative_eq!(bars[1].0, 2.5);
        assert_relative_eq!(bars[1].1, 3.5);
    }

    #[test]
    fn test_slug() {
        let hist = fixed_histogram(&[1.0, 2.0], 1).unwrap();
        let chart = HistogramChart::new(hist.clone(), "Histograma de Años de estudio");
        assert_eq!(chart.slug(), "histograma-de-años-de-estudio");

        let chart = HistogramChart::new(hist, "  !! ");
        assert_eq!(chart.slug(), "histogram");
    }
}
