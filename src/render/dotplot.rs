// dotplot.rs - Syntenic dotplot in combined genomic-element coordinates

use crate::core::layout::{filter_blocks, place_block, GenomicOffsets, Segment};
use crate::data::SyntenyTable;
use crate::render::style::{FigureGeometry, DOTPLOT_GEOMETRY};
use crate::render::{plot_err, save_figure, Figure};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use regex::Regex;
use std::path::Path;

const GRID_ALPHA: f64 = 0.2;
const SEGMENT_ALPHA: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct DotplotOptions {
    /// Carry the last non-missing `list_x` down over rows that omit it
    pub forward_fill: bool,
    pub include_elements: Option<Regex>,
    pub exclude_elements: Option<Regex>,
    /// Axis offset in points
    pub offset: f64,
}

impl Default for DotplotOptions {
    fn default() -> Self {
        Self {
            forward_fill: true,
            include_elements: None,
            exclude_elements: None,
            offset: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DotplotFigure {
    pub offsets: GenomicOffsets,
    /// One segment per synteny block, in table order
    pub segments: Vec<Segment>,
    pub offset: f64,
    pub geometry: FigureGeometry,
}

impl DotplotFigure {
    /// Every drawn segment: each block followed by its mirror image
    pub fn plotted_segments(&self) -> Vec<Segment> {
        self.segments
            .iter()
            .flat_map(|s| [*s, s.mirror()])
            .collect()
    }

    /// Axis ticks at every element boundary, labelled with the raw offset
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.offsets
            .boundaries()
            .into_iter()
            .map(|b| (b as f64, b.to_string()))
            .collect()
    }
}

/// Lay out and draw a synteny table; the figure is always returned and
/// additionally saved when `output_file` is given
pub fn syntenic_dotplot(
    table: &SyntenyTable,
    output_file: Option<&Path>,
    options: &DotplotOptions,
) -> Result<DotplotFigure, String> {
    let blocks = table.resolve_blocks(options.forward_fill)?;
    let total_blocks = blocks.len();
    let blocks = filter_blocks(
        blocks,
        options.include_elements.as_ref(),
        options.exclude_elements.as_ref(),
    );
    if blocks.len() < total_blocks {
        println!(
            "🔍 Element filters kept {}/{} synteny blocks",
            blocks.len(),
            total_blocks
        );
    }
    if blocks.is_empty() {
        return Err("No synteny blocks to plot".to_string());
    }

    let offsets = GenomicOffsets::from_blocks(&blocks);
    println!(
        "🎨 Syntenic dotplot: {} blocks over {} genomic elements (total length {})",
        blocks.len(),
        offsets.len(),
        offsets.total
    );

    let segments = blocks
        .iter()
        .map(|block| place_block(block, &offsets))
        .collect::<Result<Vec<_>, String>>()?;

    let figure = DotplotFigure {
        offsets,
        segments,
        offset: options.offset,
        geometry: DOTPLOT_GEOMETRY,
    };

    if let Some(path) = output_file {
        save_figure(&figure, path)?;
    }

    Ok(figure)
}

impl Figure for DotplotFigure {
    fn name(&self) -> &'static str {
        "dotplot"
    }

    fn geometry(&self) -> FigureGeometry {
        self.geometry
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), String> {
        root.fill(&WHITE).map_err(plot_err)?;

        let g = &self.geometry;
        let total = self.offsets.total.max(1) as f64;
        let ticks = self.tick_labels();

        let margin = g.points_to_pixels(12.0) as u32;
        let label_area = g.points_to_pixels(48.0) as u32;
        let (width, _) = root.dim_in_pixel();
        let plot_w = (width as f64 - (label_area + 2 * margin) as f64).max(1.0);
        let pad = total * g.points_to_pixels(self.offset) / plot_w;

        let axis_style = BLACK.stroke_width(g.points_to_pixels(0.8).max(1.0) as u32);
        let mut chart = ChartBuilder::on(root)
            .margin(margin)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area)
            .build_cartesian_2d(-pad..total, -pad..total)
            .map_err(plot_err)?;

        // default labels would fall on round numbers, boundary ticks are drawn below
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_labels(0)
            .axis_style(axis_style)
            .draw()
            .map_err(plot_err)?;

        let tick_len = g.points_to_pixels(3.5).round() as i32;
        let x_label_style = g
            .font(8.0)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let y_label_style = g
            .font(8.0)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let (base_x, base_y) = root.get_base_pixel();

        for (value, label) in &ticks {
            let value = *value;
            let (x, y) = chart.backend_coord(&(value, -pad));
            let (x, y) = (x - base_x, y - base_y);
            root.draw(&PathElement::new(vec![(x, y), (x, y + tick_len)], axis_style))
                .map_err(plot_err)?;
            root.draw(&Text::new(label.clone(), (x, y + 2 * tick_len), x_label_style.clone()))
                .map_err(plot_err)?;

            let (x, y) = chart.backend_coord(&(-pad, value));
            let (x, y) = (x - base_x, y - base_y);
            root.draw(&PathElement::new(vec![(x - tick_len, y), (x, y)], axis_style))
                .map_err(plot_err)?;
            root.draw(&Text::new(label.clone(), (x - 2 * tick_len, y), y_label_style.clone()))
                .map_err(plot_err)?;
        }

        let line_px = g.points_to_pixels(1.0).max(1.0) as u32;
        let grid_style = BLACK.mix(GRID_ALPHA).stroke_width(line_px);
        let dash = g.points_to_pixels(1.0).max(1.0) as u32;
        let gap = g.points_to_pixels(2.5).max(1.0) as u32;

        for &(t, _) in &ticks {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(t, 0.0), (t, total)],
                    dash,
                    gap,
                    grid_style,
                ))
                .map_err(plot_err)?;
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(0.0, t), (total, t)],
                    dash,
                    gap,
                    grid_style,
                ))
                .map_err(plot_err)?;
        }

        chart
            .draw_series(LineSeries::new(ticks.iter().map(|(t, _)| (*t, *t)), grid_style))
            .map_err(plot_err)?;

        let segment_style = BLACK.mix(SEGMENT_ALPHA).stroke_width(line_px);
        chart
            .draw_series(self.plotted_segments().into_iter().map(|s| {
                PathElement::new(
                    vec![
                        (s.start.0 as f64, s.start.1 as f64),
                        (s.end.0 as f64, s.end.1 as f64),
                    ],
                    segment_style,
                )
            }))
            .map_err(plot_err)?;

        Ok(())
    }
}
