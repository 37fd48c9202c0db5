//! Chart rendering with `plotters`.
//!
//! Three fixed charts, each written as a 600x400 PNG next to the workbook:
//! a scatter of every expenditure over time, a pie of spending per item,
//! and a grouped bar chart comparing actual spending against the 50/30/20
//! recommendation. Chart output is best effort: a failed render is logged
//! and skipped, and the workbook simply embeds fewer images.

use crate::error::{ReportError, Result};
use crate::ledger::Ledger;
use chrono::{Duration, NaiveDate};
use log::warn;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::{Palette, Palette99};
use std::path::Path;

/// Expenditures-over-time scatter plot.
pub const SCATTER_FILE: &str = "scatter.png";

/// Spending distribution pie chart.
pub const PIE_FILE: &str = "pie chart.png";

/// Actual vs recommended grouped bar chart.
pub const BAR_FILE: &str = "double bar graph.png";

/// 6x4 inches at 100 dpi.
const CHART_SIZE: (u32, u32) = (600, 400);

const BAR_CATEGORIES: [&str; 4] = ["Needs", "Wants", "Others", "Potential Savings"];

fn chart_err(err: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(err.to_string())
}

/// Picks a distinct color per pie slice.
fn slice_color(index: usize) -> RGBColor {
    let (r, g, b) = Palette99::COLORS[index % Palette99::COLORS.len()];
    RGBColor(r, g, b)
}

/// Renders all three charts, logging and skipping any that fail.
///
/// Returns the file names that were actually written, for the workbook
/// writer to embed.
pub fn render_all(ledger: &Ledger) -> Vec<&'static str> {
    type Renderer = fn(&Ledger, &Path) -> Result<()>;
    let jobs: [(&'static str, Renderer); 3] = [
        (SCATTER_FILE, render_scatter),
        (PIE_FILE, render_pie),
        (BAR_FILE, render_bar),
    ];

    let mut written = Vec::new();
    for (file, render) in jobs {
        match render(ledger, Path::new(file)) {
            Ok(()) => written.push(file),
            Err(e) => warn!("Skipping chart {}: {}", file, e),
        }
    }

    written
}

/// Scatter of every accepted expenditure, date ascending on the x axis.
pub fn render_scatter(ledger: &Ledger, path: &Path) -> Result<()> {
    let mut points: Vec<(NaiveDate, f64)> = ledger
        .all_expenditures()
        .iter()
        .map(|r| (r.date, r.price.to_f64()))
        .collect();
    points.sort_by_key(|&(date, _)| date);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (first, last) = match (points.first(), points.last()) {
        (Some(&(first, _)), Some(&(last, _))) => (first, last),
        _ => return root.present().map_err(chart_err),
    };
    // a zero-width date range cannot be plotted
    let end = if last > first {
        last
    } else {
        last + Duration::days(1)
    };

    let max_price = points.iter().map(|p| p.1).fold(1.0_f64, f64::max);
    let min_price = points.iter().map(|p| p.1).fold(0.0_f64, f64::min);

    let mut chart = ChartBuilder::on(&root)
        .caption("Expenditures", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(first..end, min_price * 1.1..max_price * 1.1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(date, price)| Circle::new((date, price), 4, BLUE.filled())),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

/// Pie of spending per item (the folded by-item set), with percentage
/// annotations and a color-swatch legend.
pub fn render_pie(ledger: &Ledger, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let items = ledger.expense_by_item();
    let sizes: Vec<f64> = items.iter().map(|r| r.price.to_f64()).collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        return root.present().map_err(chart_err);
    }

    let labels: Vec<String> = items.iter().map(|r| r.item.clone()).collect();
    let colors: Vec<RGBColor> = (0..items.len()).map(slice_color).collect();

    let area = root
        .titled("Spending Distribution", ("sans-serif", 24))
        .map_err(chart_err)?;

    let center = (CHART_SIZE.0 as i32 / 2 - 60, CHART_SIZE.1 as i32 / 2);
    let radius = 120.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font());
    pie.percentages(("sans-serif", 14).into_font());
    area.draw(&pie).map_err(chart_err)?;

    let legend_x = CHART_SIZE.0 as i32 - 140;
    for (i, label) in labels.iter().enumerate() {
        let y = 20 + i as i32 * 18;
        area.draw(&Rectangle::new(
            [(legend_x, y), (legend_x + 12, y + 12)],
            colors[i].filled(),
        ))
        .map_err(chart_err)?;
        area.draw(&Text::new(
            label.clone(),
            (legend_x + 18, y),
            ("sans-serif", 14).into_font(),
        ))
        .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)
}

/// Grouped bars: actual `[needs, wants, others, net income]` next to the
/// recommended `[0.5, 0.3, 0, 0.2] x total revenue` allocation.
pub fn render_bar(ledger: &Ledger, path: &Path) -> Result<()> {
    let split = ledger.recommended_split();
    let actual = [
        ledger.total_needs().to_f64(),
        ledger.total_wants().to_f64(),
        ledger.total_others().to_f64(),
        ledger.net_income().to_f64(),
    ];
    let recommended = [
        split.needs.to_f64(),
        split.wants.to_f64(),
        split.others.to_f64(),
        split.savings.to_f64(),
    ];

    let max_value = actual
        .iter()
        .chain(recommended.iter())
        .fold(1.0_f64, |acc, &v| acc.max(v));
    let min_value = actual
        .iter()
        .chain(recommended.iter())
        .fold(0.0_f64, |acc, &v| acc.min(v));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Current vs Recommended Spending Distribution",
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-1.0..4.0, min_value * 1.1..max_value * 1.1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .y_desc("Amount")
        .x_labels(6)
        .x_label_formatter(&|x: &f64| {
            if x.fract() == 0.0 && (0.0..=3.0).contains(x) {
                BAR_CATEGORIES[*x as usize].to_string()
            } else {
                String::new()
            }
        })
        .disable_x_mesh()
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(actual.iter().enumerate().map(|(i, &v)| {
            Rectangle::new([(i as f64 - 0.35, 0.0), (i as f64, v)], BLUE.filled())
        }))
        .map_err(chart_err)?
        .label("Current Spending Distribution")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));

    chart
        .draw_series(recommended.iter().enumerate().map(|(i, &v)| {
            Rectangle::new([(i as f64, 0.0), (i as f64 + 0.35, v)], RED.filled())
        }))
        .map_err(chart_err)?
        .label("Recommended Spending Distribution")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}
