// selection.rs - 2x2 panel of overlaid Ks/Ka/omega histograms

use crate::core::selection::{build_panels, KsRange, SelectionPanel};
use crate::data::Distribution;
use crate::render::style::{FigureGeometry, HistogramStyle, SELECTION_GEOMETRY};
use crate::render::{plot_err, save_figure, Figure};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Species genus";
pub const DEFAULT_OFFSET: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// One opacity per distribution; auto ramp when fewer are given
    pub alphas: Option<Vec<f64>>,
    pub ks_range: KsRange,
    /// Axis offset in points
    pub offset: f64,
    pub title: String,
    pub style: HistogramStyle,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            alphas: None,
            ks_range: KsRange::default(),
            offset: DEFAULT_OFFSET,
            title: DEFAULT_TITLE.to_string(),
            style: HistogramStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionFigure {
    pub title: String,
    pub panels: Vec<SelectionPanel>,
    pub style: HistogramStyle,
    pub offset: f64,
    pub geometry: FigureGeometry,
}

/// Build the selection panel figure, saving it when `output_file` is given
pub fn plot_selection(
    dists: &[Distribution],
    output_file: Option<&Path>,
    options: &SelectionOptions,
) -> Result<SelectionFigure, String> {
    println!(
        "🎨 Selection plot: {} distribution(s), Ks range ({}, {})",
        dists.len(),
        options.ks_range.lo,
        options.ks_range.hi
    );

    let panels = build_panels(
        dists,
        options.alphas.as_deref(),
        options.ks_range,
        options.style.bins,
    )?;

    let figure = SelectionFigure {
        title: options.title.clone(),
        panels,
        style: options.style,
        offset: options.offset,
        geometry: SELECTION_GEOMETRY,
    };

    if let Some(path) = output_file {
        save_figure(&figure, path)?;
    }

    Ok(figure)
}

impl SelectionFigure {
    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        panel: &SelectionPanel,
        with_legend: bool,
    ) -> Result<(), String> {
        let (x0, x1) = match (panel.edges.first(), panel.edges.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(format!("{} panel has no bin edges", panel.axis)),
        };
        let y_max = match panel.max_count() {
            m if m > 0.0 => m * 1.05,
            _ => 1.0,
        };

        let g = &self.geometry;
        let margin = g.points_to_pixels(12.0) as u32;
        let label_area = g.points_to_pixels(36.0) as u32;

        // push the axes outward by `offset` points, seaborn-despine style
        let offset_px = g.points_to_pixels(self.offset);
        let (width, height) = area.dim_in_pixel();
        let plot_w = (width as f64 - (label_area + 2 * margin) as f64).max(1.0);
        let plot_h = (height as f64 - (label_area + 2 * margin) as f64).max(1.0);
        let pad_x = (x1 - x0) * offset_px / plot_w;
        let pad_y = y_max * offset_px / plot_h;

        let mut chart = ChartBuilder::on(area)
            .margin(margin)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area)
            .build_cartesian_2d((x0 - pad_x)..x1, -pad_y..y_max)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(panel.axis.label())
            .axis_desc_style(g.font(12.0))
            .label_style(g.font(10.0))
            .axis_style(BLACK.stroke_width(g.points_to_pixels(0.8).max(1.0) as u32))
            .draw()
            .map_err(plot_err)?;

        let rwidth = self.style.rwidth;
        let swatch = g.points_to_pixels(4.0).round() as i32;
        for series in &panel.series {
            let fill = self.style.color.mix(series.alpha).filled();
            chart
                .draw_series(
                    panel
                        .edges
                        .windows(2)
                        .zip(&series.counts)
                        .filter(|(_, count)| **count > 0.0)
                        .map(|(edge, &count)| {
                            let bin_width = edge[1] - edge[0];
                            let left = edge[0] + bin_width * (1.0 - rwidth) / 2.0;
                            Rectangle::new([(left, 0.0), (left + bin_width * rwidth, count)], fill)
                        }),
                )
                .map_err(plot_err)?
                .label(series.name.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - swatch / 2), (x + 2 * swatch, y + swatch / 2)], fill)
                });
        }

        if with_legend {
            chart
                .configure_series_labels()
                .border_style(&TRANSPARENT)
                .position(SeriesLabelPosition::UpperRight)
                .label_font(g.font(10.0))
                .draw()
                .map_err(plot_err)?;
        }

        Ok(())
    }
}

impl Figure for SelectionFigure {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn geometry(&self) -> FigureGeometry {
        self.geometry
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), String> {
        root.fill(&WHITE).map_err(plot_err)?;
        let root = root
            .titled(&self.title, self.geometry.font(16.0))
            .map_err(plot_err)?;

        let areas = root.split_evenly((2, 2));
        // distribution names go in a legend on the Ks panel only
        for (i, (area, panel)) in areas.iter().zip(&self.panels).enumerate() {
            self.draw_panel(area, panel, i == 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DistributionRow;

    fn sample_dists() -> Vec<Distribution> {
        let a = Distribution::new(
            "a",
            (1..50)
                .map(|i| {
                    let ks = i as f64 * 0.1;
                    DistributionRow::new(ks, ks / 8.0, 0.125, 1.0)
                })
                .collect(),
        );
        let b = Distribution::new(
            "b",
            (1..30)
                .map(|i| {
                    let ks = i as f64 * 0.15;
                    DistributionRow::new(ks, ks / 4.0, 0.25, 0.5)
                })
                .collect(),
        );
        vec![a, b]
    }

    #[test]
    fn test_plot_selection_without_output() {
        let dists = sample_dists();
        let figure = plot_selection(&dists, None, &SelectionOptions::default()).unwrap();

        assert_eq!(figure.panels.len(), 4);
        assert_eq!(figure.title, DEFAULT_TITLE);
        assert_eq!(figure.size(), (3600, 3600));
        assert_eq!(figure.name(), "selection");
        for panel in &figure.panels {
            assert_eq!(panel.series.len(), 2);
            assert_eq!(panel.series[0].alpha, 0.2);
            assert_eq!(panel.series[1].alpha, 1.0);
        }
    }

    #[test]
    fn test_series_carry_distribution_names() {
        let dists = sample_dists();
        let figure = plot_selection(&dists, None, &SelectionOptions::default()).unwrap();
        for panel in &figure.panels {
            let names: Vec<&str> = panel.series.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["a", "b"]);
        }
    }

    #[test]
    fn test_plot_selection_given_alphas() {
        let dists = sample_dists();
        let options = SelectionOptions {
            alphas: Some(vec![0.4, 0.6]),
            ..SelectionOptions::default()
        };
        let figure = plot_selection(&dists, None, &options).unwrap();
        assert_eq!(figure.panels[0].series[0].alpha, 0.4);
        assert_eq!(figure.panels[3].series[1].alpha, 0.6);
    }

    #[test]
    fn test_plot_selection_empty_fails() {
        let dists = vec![Distribution::new("empty", Vec::new())];
        assert!(plot_selection(&dists, None, &SelectionOptions::default()).is_err());
    }
}
