use super::{BarChart, ChartRenderer};
use crate::error::{Result, StarChartError};
use colored::*;
use std::io::{self, Write};

pub const DEFAULT_ROWS: usize = 12;
const MIN_COLUMN_WIDTH: usize = 5;
const BAR_CELL: &str = "█";

/// Draws a vertical bar chart as text, one column per repository.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    /// Height of the tallest bar in text rows.
    pub rows: usize,
    pub color: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            color: true,
        }
    }
}

impl TerminalRenderer {
    pub fn new(rows: usize, color: bool) -> Self {
        Self {
            rows: rows.max(1),
            color,
        }
    }

    pub fn render_to<W: Write>(&self, chart: &BarChart, out: &mut W) -> Result<()> {
        if chart.bars.is_empty() {
            return Err(StarChartError::EmptyData);
        }

        // A zero-height chart still draws one row.
        let rows = self.rows.max(1);
        let max = chart.max_height();
        let gutter = max.to_string().len().max(1);
        let widths: Vec<usize> = chart
            .bars
            .iter()
            .map(|bar| {
                bar.label
                    .chars()
                    .count()
                    .max(bar.height.to_string().len())
                    .max(MIN_COLUMN_WIDTH)
                    + 2
            })
            .collect();
        let levels: Vec<usize> = chart
            .bars
            .iter()
            .map(|bar| scaled_rows(bar.height, max, rows))
            .collect();

        let title = if self.color {
            chart.title.bold().to_string()
        } else {
            chart.title.clone()
        };
        writeln!(out, "{}", title)?;
        writeln!(out)?;
        writeln!(out, "{}", chart.y_label)?;

        for row in (1..=rows).rev() {
            let tick = if row == rows {
                max.to_string()
            } else {
                String::new()
            };
            write!(out, "{:>gutter$} |", tick, gutter = gutter)?;
            for (width, level) in widths.iter().zip(&levels) {
                let cell_width = width - 2;
                let cell = if *level >= row {
                    self.paint(&BAR_CELL.repeat(cell_width))
                } else {
                    " ".repeat(cell_width)
                };
                write!(out, " {} ", cell)?;
            }
            writeln!(out)?;
        }

        let total: usize = widths.iter().sum();
        writeln!(out, "{:>gutter$} +{}", 0, "-".repeat(total), gutter = gutter)?;

        write!(out, "{:>gutter$}  ", "", gutter = gutter)?;
        for (bar, width) in chart.bars.iter().zip(&widths) {
            write!(out, "{:^width$}", bar.label, width = *width)?;
        }
        writeln!(out)?;

        write!(out, "{:>gutter$}  ", "", gutter = gutter)?;
        for (bar, width) in chart.bars.iter().zip(&widths) {
            write!(out, "{:^width$}", bar.height, width = *width)?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{:>gutter$}  {:^total$}",
            "",
            chart.x_label,
            gutter = gutter,
            total = total
        )?;
        out.flush()?;
        Ok(())
    }

    fn paint(&self, cells: &str) -> String {
        if self.color {
            cells.blue().to_string()
        } else {
            cells.to_string()
        }
    }
}

impl ChartRenderer for TerminalRenderer {
    fn render(&self, chart: &BarChart) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(chart, &mut handle)
    }
}

/// Number of text rows a bar of `height` fills. Any non-zero bar gets at
/// least one row.
fn scaled_rows(height: u64, max: u64, rows: usize) -> usize {
    if height == 0 || max == 0 {
        return 0;
    }
    let scaled = (height as u128 * rows as u128).div_ceil(max as u128);
    (scaled as usize).clamp(1, rows)
}
