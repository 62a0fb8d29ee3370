// mod.rs - Figure rendering on plotters backends

pub mod dotplot;
pub mod selection;
pub mod style;

use crate::output::ensure_parent_dir;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

// Re-export main types for convenience
pub use dotplot::{syntenic_dotplot, DotplotFigure, DotplotOptions};
pub use selection::{plot_selection, SelectionFigure, SelectionOptions};
pub use style::{parse_color, FigureGeometry, HistogramStyle};

/// A fully computed figure that can be drawn onto any plotters backend
pub trait Figure {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    fn geometry(&self) -> FigureGeometry;

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), String>;

    /// Pixel size of the rendered figure
    fn size(&self) -> (u32, u32) {
        self.geometry().pixels()
    }
}

pub(crate) fn plot_err<E: std::fmt::Display>(e: E) -> String {
    format!("Rendering failed: {}", e)
}

fn is_svg(file_path: &Path) -> bool {
    file_path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// Save a figure; `.svg` paths get vector output, everything else a bitmap
/// encoded by extension (PNG for `.png`)
pub fn save_figure<F: Figure>(figure: &F, file_path: &Path) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    if is_svg(file_path) {
        let root = SVGBackend::new(file_path, figure.size()).into_drawing_area();
        figure.draw(&root)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(file_path, figure.size()).into_drawing_area();
        figure.draw(&root)?;
        root.present().map_err(plot_err)?;
    }

    let (width, height) = figure.size();
    println!(
        "💾 Saved {} figure ({}x{} px, {} DPI): {}",
        figure.name(),
        width,
        height,
        figure.geometry().dpi,
        file_path.display()
    );
    Ok(())
}

/// Render a figure into an in-memory RGB raster (row-major, 3 bytes per pixel)
pub fn render_rgb<F: Figure>(figure: &F) -> Result<Vec<u8>, String> {
    let (width, height) = figure.size();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        figure.draw(&root)?;
        root.present().map_err(plot_err)?;
    }
    Ok(buffer)
}
