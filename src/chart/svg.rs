use super::{BarChart, ChartRenderer};
use crate::error::{Result, StarChartError};
use plotters::prelude::*;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 768;

/// Saves the chart as an SVG file.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, chart: &BarChart) -> Result<()> {
        if chart.bars.is_empty() {
            return Err(StarChartError::EmptyData);
        }

        let root = SVGBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        // Headroom above the tallest bar; a chart of all zeros still needs a range.
        let max = chart.max_height().max(1);
        let y_top = max.saturating_add(max / 10).saturating_add(1);
        let count = chart.bars.len();

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 28).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0usize..count).into_segmented(), 0u64..y_top)
            .map_err(render_error)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(count)
            .x_label_formatter(&|value: &SegmentValue<usize>| match value {
                SegmentValue::CenterOf(index) => chart
                    .bars
                    .get(*index)
                    .map(|bar| bar.label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(render_error)?;

        ctx.draw_series(
            Histogram::vertical(&ctx)
                .style(BLUE.filled())
                .margin(10)
                .data(chart.bars.iter().enumerate().map(|(index, bar)| (index, bar.height))),
        )
        .map_err(render_error)?;

        root.present().map_err(render_error)?;
        info!(path = %self.path.display(), bars = count, "Saved star chart");
        Ok(())
    }
}

fn render_error(err: impl std::fmt::Display) -> StarChartError {
    StarChartError::RenderError(err.to_string())
}
