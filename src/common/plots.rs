//! Plotting infrastructure for the sales dashboard charts
//!
//! This module renders the five dashboard charts using the [`plotters`] crate.
//! Charts are saved as PNG files with fixed 1200x800 resolution.
//!
//! # Headless Compatibility
//! All charts use plotters' bitmap backend, which works in headless
//! environments (Docker/CI) without system font dependencies.

use crate::analysis::constants::CORRELATION_METRICS;
use crate::analysis::exploratory::{ExploratoryReport, GroupSummary, MonthSummary, RankedEntry};
use crate::dataset::SalesDataset;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Chart resolution in pixels
const CHART_SIZE: (u32, u32) = (1200, 800);

/// Slice colors for the pie chart, cycled when the roster is larger
const PIE_COLORS: [RGBColor; 8] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(158, 157, 36),
];

/// Formats currency values into compact units for chart axis labels
fn format_money(value: f64) -> String {
    let abs = value.abs();

    if abs >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.0}k", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Renders all five dashboard charts into `output_dir`
///
/// An empty dataset renders nothing and returns `Ok(())`.
pub fn render_dashboard(
    dataset: &SalesDataset,
    report: &ExploratoryReport,
    output_dir: &Path,
) -> Result<()> {
    if dataset.records.is_empty() {
        return Ok(());
    }

    create_monthly_revenue_plot(&report.months, &output_dir.join("monthly_revenue.png"))?;
    create_region_revenue_plot(&report.regions, &output_dir.join("region_revenue.png"))?;
    create_correlation_heatmap(&report.correlations, &output_dir.join("correlation_heatmap.png"))?;
    create_price_boxplot(dataset, &output_dir.join("price_boxplot.png"))?;
    create_salesperson_share_plot(
        &report.salespeople,
        &output_dir.join("salesperson_share.png"),
    )?;

    Ok(())
}

/// Creates the monthly revenue line chart
///
/// X-axis is the chronological month sequence, Y-axis is revenue with compact
/// currency labels. Data points are marked with filled circles.
pub fn create_monthly_revenue_plot(months: &[MonthSummary], output_path: &Path) -> Result<()> {
    if months.is_empty() {
        return Err(PlotError::InvalidData("Months cannot be empty".to_string()));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_max = months
        .iter()
        .map(|m| m.revenue)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;
    let x_max = (months.len() as u32).saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Revenue", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0u32..x_max, 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Revenue")
        .x_labels(months.len())
        .x_label_formatter(&|x| {
            months
                .get(*x as usize)
                .map(|m| m.label.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format_money(*y))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            months
                .iter()
                .enumerate()
                .map(|(i, m)| (i as u32, m.revenue)),
            &BLUE,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            months
                .iter()
                .enumerate()
                .map(|(i, m)| Circle::new((i as u32, m.revenue), 4, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates the revenue-by-region vertical bar chart
pub fn create_region_revenue_plot(regions: &[GroupSummary], output_path: &Path) -> Result<()> {
    if regions.is_empty() {
        return Err(PlotError::InvalidData(
            "Regions cannot be empty".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_max = regions
        .iter()
        .map(|r| r.revenue)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Revenue by Region", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((0u32..regions.len() as u32).into_segmented(), 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Region")
        .y_desc("Revenue")
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => regions
                .get(*i as usize)
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format_money(*y))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(40)
                .data(
                    regions
                        .iter()
                        .enumerate()
                        .map(|(i, r)| (i as u32, r.revenue)),
                ),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates the correlation heatmap
///
/// Each cell is filled with a red (positive) or blue (negative) tint scaled
/// by the coefficient's magnitude, with the numeric value drawn on top.
pub fn create_correlation_heatmap(matrix: &[[f64; 3]; 3], output_path: &Path) -> Result<()> {
    let n = CORRELATION_METRICS.len() as u32;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation Matrix", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((0u32..n).into_segmented(), (0u32..n).into_segmented())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let metric_label = |x: &SegmentValue<u32>| match x {
        SegmentValue::CenterOf(i) => CORRELATION_METRICS
            .get(*i as usize)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&metric_label)
        .y_label_formatter(&metric_label)
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Filled cells
    chart
        .draw_series((0..n).flat_map(|i| {
            (0..n).map(move |j| {
                let value = matrix[i as usize][j as usize];
                Rectangle::new(
                    [
                        (SegmentValue::Exact(j), SegmentValue::Exact(i)),
                        (SegmentValue::Exact(j + 1), SegmentValue::Exact(i + 1)),
                    ],
                    correlation_color(value).filled(),
                )
            })
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Coefficient labels on top of the cells
    chart
        .draw_series((0..n).flat_map(|i| {
            (0..n).map(move |j| {
                let value = matrix[i as usize][j as usize];
                Text::new(
                    format!("{:.2}", value),
                    (SegmentValue::CenterOf(j), SegmentValue::CenterOf(i)),
                    ("sans-serif", 30),
                )
            })
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates the per-category unit price box plot
pub fn create_price_boxplot(dataset: &SalesDataset, output_path: &Path) -> Result<()> {
    if dataset.records.is_empty() {
        return Err(PlotError::InvalidData(
            "Dataset cannot be empty".to_string(),
        ));
    }

    let prices_by_category = prices_by_category(dataset);
    let categories: Vec<&str> = prices_by_category.keys().copied().collect();

    let y_max = dataset
        .records
        .iter()
        .map(|r| r.price)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Unit Price Distribution by Category", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(
            (0u32..categories.len() as u32).into_segmented(),
            0f32..y_max as f32,
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Category")
        .y_desc("Unit Price")
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => categories
                .get(*i as usize)
                .map(|c| c.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format_money(*y as f64))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(categories.iter().enumerate().map(|(i, category)| {
            let quartiles = Quartiles::new(&prices_by_category[category]);
            Boxplot::new_vertical(SegmentValue::CenterOf(i as u32), &quartiles)
                .width(40)
                .style(&BLUE)
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates the salesperson revenue share pie chart
pub fn create_salesperson_share_plot(
    salespeople: &[RankedEntry],
    output_path: &Path,
) -> Result<()> {
    if salespeople.is_empty() {
        return Err(PlotError::InvalidData(
            "Salespeople cannot be empty".to_string(),
        ));
    }

    let sizes: Vec<f64> = salespeople.iter().map(|p| p.revenue).collect();
    if sizes.iter().all(|&s| s <= 0.0) {
        return Err(PlotError::InvalidData(
            "Salesperson revenues must be positive".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let root = root
        .titled("Salesperson Revenue Share", ("sans-serif", 40))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let colors: Vec<RGBColor> = (0..salespeople.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();
    let labels: Vec<String> = salespeople
        .iter()
        .map(|p| format!("{} ({:.1}%)", p.name, p.share))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 24));

    root.draw(&pie)
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Collects unit prices per category, skipping empty groups
fn prices_by_category(dataset: &SalesDataset) -> BTreeMap<&str, Vec<f64>> {
    let mut prices: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for record in &dataset.records {
        prices
            .entry(record.category.as_str())
            .or_default()
            .push(record.price);
    }

    prices
}

/// Maps a correlation coefficient to a cell color
///
/// Positive values blend white toward red, negative values toward blue.
fn correlation_color(value: f64) -> RGBColor {
    let t = value.clamp(-1.0, 1.0);

    if t >= 0.0 {
        let fade = (255.0 * (1.0 - t)) as u8;
        RGBColor(255, fade, fade)
    } else {
        let fade = (255.0 * (1.0 + t)) as u8;
        RGBColor(fade, fade, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SalesRecord;
    use chrono::NaiveDate;

    fn sample_dataset() -> SalesDataset {
        let record = |category: &str, price: f64, salesperson: &str| SalesRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            product: "Widget".to_string(),
            category: category.to_string(),
            price,
            quantity: 2,
            salesperson: salesperson.to_string(),
            region: "North".to_string(),
        };

        SalesDataset::from_records(vec![
            record("Laptops", 900.0, "Ana"),
            record("Laptops", 1100.0, "Bob"),
            record("Audio", 150.0, "Ana"),
            record("Audio", 200.0, "Bob"),
        ])
    }

    fn sample_months() -> Vec<MonthSummary> {
        vec![
            MonthSummary {
                label: "Jan 2025".to_string(),
                orders: 10,
                revenue: 1000.0,
            },
            MonthSummary {
                label: "Feb 2025".to_string(),
                orders: 12,
                revenue: 1500.0,
            },
        ]
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(1000.0), "$1k");
        assert_eq!(format_money(45_500.0), "$46k");
        assert_eq!(format_money(1_200_000.0), "$1.2M");
    }

    #[test]
    fn test_correlation_color() {
        assert_eq!(correlation_color(1.0), RGBColor(255, 0, 0));
        assert_eq!(correlation_color(-1.0), RGBColor(0, 0, 255));
        assert_eq!(correlation_color(0.0), RGBColor(255, 255, 255));
        // Out-of-range values are clamped
        assert_eq!(correlation_color(5.0), RGBColor(255, 0, 0));
    }

    #[test]
    fn test_prices_by_category() {
        let dataset = sample_dataset();
        let prices = prices_by_category(&dataset);
        assert_eq!(prices.len(), 2);
        assert_eq!(prices["Laptops"], vec![900.0, 1100.0]);
        assert_eq!(prices["Audio"], vec![150.0, 200.0]);
    }

    #[test]
    fn test_empty_input_validation() {
        let temp_dir = std::env::temp_dir();
        let path = temp_dir.join("test_plot.png");

        let result = create_monthly_revenue_plot(&[], &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        let result = create_region_revenue_plot(&[], &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        let result = create_salesperson_share_plot(&[], &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        let empty = SalesDataset::from_records(Vec::new());
        let result = create_price_boxplot(&empty, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_zero_revenue_pie_rejected() {
        let temp_dir = std::env::temp_dir();
        let path = temp_dir.join("test_pie.png");

        let people = vec![RankedEntry {
            name: "Ana".to_string(),
            revenue: 0.0,
            share: 0.0,
        }];
        let result = create_salesperson_share_plot(&people, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_dashboard() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = sample_dataset();
        let report = crate::analysis::exploratory::build_report(&dataset);

        render_dashboard(&dataset, &report, temp_dir.path()).unwrap();

        for name in [
            "monthly_revenue.png",
            "region_revenue.png",
            "correlation_heatmap.png",
            "price_boxplot.png",
            "salesperson_share.png",
        ] {
            assert!(temp_dir.path().join(name).exists(), "{} missing", name);
        }
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_monthly_revenue_plot_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("monthly.png");

        create_monthly_revenue_plot(&sample_months(), &path).unwrap();
        assert!(path.exists());
    }
}
