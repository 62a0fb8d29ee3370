// style.rs - Figure geometry and histogram styling

use plotters::style::RGBColor;

pub const FONT_FAMILY: &str = "sans-serif";

/// Physical size of a figure; pixel size is inches × DPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureGeometry {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

/// 12×12 in at 300 DPI
pub const SELECTION_GEOMETRY: FigureGeometry = FigureGeometry {
    width_in: 12.0,
    height_in: 12.0,
    dpi: 300,
};

/// 15×15 in at 200 DPI
pub const DOTPLOT_GEOMETRY: FigureGeometry = FigureGeometry {
    width_in: 15.0,
    height_in: 15.0,
    dpi: 200,
};

impl FigureGeometry {
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Convert typographic points to device pixels
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    pub fn font(&self, points: f64) -> (&'static str, f64) {
        (FONT_FAMILY, self.points_to_pixels(points))
    }
}

/// Pass-through options for the overlaid histograms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramStyle {
    pub bins: usize,
    /// Bar width relative to the bin width
    pub rwidth: f64,
    pub color: RGBColor,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            bins: crate::core::selection::DEFAULT_BINS,
            rwidth: 0.8,
            color: RGBColor(0, 0, 0),
        }
    }
}

/// Parse a colour name or `#rrggbb` hex string
pub fn parse_color(s: &str) -> Result<RGBColor, String> {
    let cleaned = s.trim().to_lowercase();
    if let Some(hex) = cleaned.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid hex colour '{}': expected #rrggbb", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("Invalid hex colour '{}'", s))
        };
        return Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?));
    }

    match cleaned.as_str() {
        "black" | "k" => Ok(RGBColor(0, 0, 0)),
        "white" | "w" => Ok(RGBColor(255, 255, 255)),
        "red" | "r" => Ok(RGBColor(255, 0, 0)),
        "green" | "g" => Ok(RGBColor(0, 128, 0)),
        "blue" | "b" => Ok(RGBColor(0, 0, 255)),
        "grey" | "gray" => Ok(RGBColor(128, 128, 128)),
        "orange" => Ok(RGBColor(255, 165, 0)),
        "purple" => Ok(RGBColor(128, 0, 128)),
        _ => Err(format!(
            "Unknown colour '{}'. Use a name (black, grey, red, green, blue, orange, purple) or #rrggbb",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_pixels() {
        assert_eq!(SELECTION_GEOMETRY.pixels(), (3600, 3600));
        assert_eq!(DOTPLOT_GEOMETRY.pixels(), (3000, 3000));
        assert_eq!(SELECTION_GEOMETRY.points_to_pixels(72.0), 300.0);
        assert_eq!(DOTPLOT_GEOMETRY.font(36.0), ("sans-serif", 100.0));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("black").unwrap(), RGBColor(0, 0, 0));
        assert_eq!(parse_color("K").unwrap(), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#1f77b4").unwrap(), RGBColor(0x1f, 0x77, 0xb4));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("mauve").is_err());
    }
}
