//! Exploratory analysis over the sales dataset
//!
//! Builds an [`ExploratoryReport`] with descriptive statistics, regional and
//! monthly aggregates, top-N rankings and the pairwise correlation matrix,
//! then renders everything as ASCII tables into `exploratory.txt`.

use super::constants::{CORRELATION_METRICS, TOP_N};
use super::stats::{pearson_correlation, DescriptiveStats};
use crate::common::tables::{
    format_table, money_cell, percent_cell, GroupRow, MetricRow, MonthRow, RankRow,
};
use crate::dataset::{SalesDataset, SalesRecord};
use chrono::Datelike;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File name of the exploratory analysis report
pub const EXPLORATORY_FILE_NAME: &str = "exploratory.txt";

/// Errors that can occur during exploratory analysis
#[derive(Debug)]
pub enum ExploratoryError {
    FileWrite(std::io::Error),
}

impl std::fmt::Display for ExploratoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExploratoryError::FileWrite(e) => write!(f, "Failed to write report: {}", e),
        }
    }
}

impl std::error::Error for ExploratoryError {}

impl From<std::io::Error> for ExploratoryError {
    fn from(err: std::io::Error) -> Self {
        ExploratoryError::FileWrite(err)
    }
}

type Result<T> = core::result::Result<T, ExploratoryError>;

/// Aggregate for one group (region or category)
#[derive(Debug, Clone)]
pub struct GroupSummary {
    /// Group name
    pub name: String,
    /// Number of orders in the group
    pub orders: usize,
    /// Total units sold
    pub units: u64,
    /// Total revenue
    pub revenue: f64,
    /// Revenue share of the whole dataset, in percent
    pub share: f64,
}

/// Aggregate for one calendar month within the dataset window
#[derive(Debug, Clone)]
pub struct MonthSummary {
    /// Human-readable label, e.g. "Nov 2025"
    pub label: String,
    /// Number of orders in the month
    pub orders: usize,
    /// Total revenue in the month
    pub revenue: f64,
}

/// A ranked entity (product or salesperson) by revenue
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub name: String,
    pub revenue: f64,
    /// Revenue share of the whole dataset, in percent
    pub share: f64,
}

/// Complete exploratory analysis results
#[derive(Debug, Clone)]
pub struct ExploratoryReport {
    /// Descriptive statistics for the unit price column
    pub price: DescriptiveStats,
    /// Descriptive statistics for the quantity column
    pub quantity: DescriptiveStats,
    /// Descriptive statistics for per-order revenue
    pub revenue: DescriptiveStats,
    /// Regions sorted by revenue, descending
    pub regions: Vec<GroupSummary>,
    /// Categories sorted by revenue, descending
    pub categories: Vec<GroupSummary>,
    /// Months in chronological order
    pub months: Vec<MonthSummary>,
    /// All products sorted by revenue, descending
    pub products: Vec<RankedEntry>,
    /// All salespeople sorted by revenue, descending
    pub salespeople: Vec<RankedEntry>,
    /// Pairwise Pearson correlations over price, quantity, revenue
    pub correlations: [[f64; 3]; 3],
}

/// Builds the full exploratory report from a dataset
pub fn build_report(dataset: &SalesDataset) -> ExploratoryReport {
    let prices: Vec<f64> = dataset.records.iter().map(|r| r.price).collect();
    let quantities: Vec<f64> = dataset.records.iter().map(|r| r.quantity as f64).collect();
    let revenues: Vec<f64> = dataset.records.iter().map(SalesRecord::revenue).collect();

    let total_revenue: f64 = revenues.iter().sum();

    ExploratoryReport {
        price: DescriptiveStats::from_values(&prices),
        quantity: DescriptiveStats::from_values(&quantities),
        revenue: DescriptiveStats::from_values(&revenues),
        regions: group_by(&dataset.records, total_revenue, |r| r.region.as_str()),
        categories: group_by(&dataset.records, total_revenue, |r| r.category.as_str()),
        months: month_summaries(&dataset.records),
        products: rank_by(&dataset.records, total_revenue, |r| r.product.as_str()),
        salespeople: rank_by(&dataset.records, total_revenue, |r| r.salesperson.as_str()),
        correlations: correlation_matrix(&prices, &quantities, &revenues),
    }
}

/// Renders the report as ASCII tables, writes `exploratory.txt` and echoes it
///
/// An empty report (zero records) writes nothing and returns `Ok(())`.
pub fn write_exploratory_report(report: &ExploratoryReport, output_dir: &Path) -> Result<()> {
    if report.revenue.count == 0 {
        return Ok(());
    }

    let sections = [
        format_table(
            &descriptive_rows(report),
            Some("Descriptive Statistics (per order)"),
        ),
        format_table(&group_rows(&report.regions), Some("Revenue by Region")),
        format_table(&group_rows(&report.categories), Some("Revenue by Category")),
        format_table(&month_rows(&report.months), Some("Monthly Revenue")),
        format_table(
            &rank_rows(&report.products),
            Some("Top Products by Revenue"),
        ),
        format_table(
            &rank_rows(&report.salespeople),
            Some("Top Salespeople by Revenue"),
        ),
        format_table(
            &correlation_rows(&report.correlations),
            Some("Correlation Matrix (Pearson)"),
        ),
    ];

    let total_revenue: f64 = report.regions.iter().map(|r| r.revenue).sum();
    let summary = format!(
        "Summary\n{}\nTotal records: {}\nTotal revenue: {}",
        "=".repeat(7),
        report.revenue.count,
        money_cell(total_revenue)
    );

    let title = "Sales Exploratory Analysis";
    let output = format!(
        "{}\n{}\n\n{}\n\n{}",
        title,
        "=".repeat(title.len()),
        sections.join("\n\n"),
        summary
    );

    fs::write(output_dir.join(EXPLORATORY_FILE_NAME), &output)?;
    println!("{}", output);

    Ok(())
}

/// Aggregates records by a key, sorted by revenue descending
fn group_by<'a, F>(records: &'a [SalesRecord], total_revenue: f64, key: F) -> Vec<GroupSummary>
where
    F: Fn(&'a SalesRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, (usize, u64, f64)> = BTreeMap::new();

    for record in records {
        let entry = groups.entry(key(record)).or_default();
        entry.0 += 1;
        entry.1 += record.quantity as u64;
        entry.2 += record.revenue();
    }

    let mut summaries: Vec<GroupSummary> = groups
        .into_iter()
        .map(|(name, (orders, units, revenue))| GroupSummary {
            name: name.to_string(),
            orders,
            units,
            revenue,
            share: revenue_share(revenue, total_revenue),
        })
        .collect();

    summaries.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    summaries
}

/// Ranks entities by revenue, descending
fn rank_by<'a, F>(records: &'a [SalesRecord], total_revenue: f64, key: F) -> Vec<RankedEntry>
where
    F: Fn(&'a SalesRecord) -> &'a str,
{
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records {
        *totals.entry(key(record)).or_default() += record.revenue();
    }

    let mut ranked: Vec<RankedEntry> = totals
        .into_iter()
        .map(|(name, revenue)| RankedEntry {
            name: name.to_string(),
            revenue,
            share: revenue_share(revenue, total_revenue),
        })
        .collect();

    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    ranked
}

/// Aggregates records per calendar month, in chronological order
fn month_summaries(records: &[SalesRecord]) -> Vec<MonthSummary> {
    use super::constants::MONTH_NAMES;

    let mut months: BTreeMap<(i32, u32), (usize, f64)> = BTreeMap::new();

    for record in records {
        let entry = months
            .entry((record.date.year(), record.date.month()))
            .or_default();
        entry.0 += 1;
        entry.1 += record.revenue();
    }

    months
        .into_iter()
        .map(|((year, month), (orders, revenue))| MonthSummary {
            label: format!("{} {}", MONTH_NAMES[(month - 1) as usize], year),
            orders,
            revenue,
        })
        .collect()
}

/// 3x3 Pearson correlation matrix over price, quantity and revenue
fn correlation_matrix(prices: &[f64], quantities: &[f64], revenues: &[f64]) -> [[f64; 3]; 3] {
    let series = [prices, quantities, revenues];
    let mut matrix = [[0.0; 3]; 3];

    for (i, xs) in series.iter().enumerate() {
        for (j, ys) in series.iter().enumerate() {
            matrix[i][j] = pearson_correlation(xs, ys);
        }
    }

    matrix
}

fn revenue_share(revenue: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        (revenue / total) * 100.0
    }
}

fn descriptive_rows(report: &ExploratoryReport) -> Vec<MetricRow> {
    let metric_row = |metric: &str, value: fn(&DescriptiveStats) -> String| MetricRow {
        metric: metric.to_string(),
        price: value(&report.price),
        quantity: value(&report.quantity),
        revenue: value(&report.revenue),
    };

    vec![
        metric_row("Count", |s| s.count.to_string()),
        metric_row("Mean", |s| format!("{:.2}", s.mean)),
        metric_row("Std Dev", |s| format!("{:.2}", s.std_dev)),
        metric_row("Min", |s| format!("{:.2}", s.min)),
        metric_row("P25", |s| format!("{:.2}", s.p25)),
        metric_row("Median", |s| format!("{:.2}", s.median)),
        metric_row("P75", |s| format!("{:.2}", s.p75)),
        metric_row("Max", |s| format!("{:.2}", s.max)),
    ]
}

fn group_rows(groups: &[GroupSummary]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|g| GroupRow {
            name: g.name.clone(),
            orders: g.orders,
            units: g.units,
            revenue: money_cell(g.revenue),
            share: percent_cell(g.share),
        })
        .collect()
}

fn month_rows(months: &[MonthSummary]) -> Vec<MonthRow> {
    months
        .iter()
        .map(|m| MonthRow {
            month: m.label.clone(),
            orders: m.orders,
            revenue: money_cell(m.revenue),
        })
        .collect()
}

fn rank_rows(ranked: &[RankedEntry]) -> Vec<RankRow> {
    ranked
        .iter()
        .take(TOP_N)
        .enumerate()
        .map(|(index, entry)| RankRow {
            rank: index + 1,
            name: entry.name.clone(),
            revenue: money_cell(entry.revenue),
            share: percent_cell(entry.share),
        })
        .collect()
}

fn correlation_rows(matrix: &[[f64; 3]; 3]) -> Vec<MetricRow> {
    (0..3)
        .map(|i| MetricRow {
            metric: CORRELATION_METRICS[i].to_string(),
            price: format!("{:.3}", matrix[i][0]),
            quantity: format!("{:.3}", matrix[i][1]),
            revenue: format!("{:.3}", matrix[i][2]),
        })
        .collect()
}
