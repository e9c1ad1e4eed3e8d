//! Business insight generation
//!
//! Derives human-readable observations and recommendations from the
//! exploratory report: temporal trends, best performers, growth opportunities
//! and strategic suggestions. Insights are written to `insights.txt`.

use super::constants::CONCENTRATION_THRESHOLD;
use super::exploratory::ExploratoryReport;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the insights report
pub const INSIGHTS_FILE_NAME: &str = "insights.txt";

/// Errors that can occur while writing insights
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Failed to write insights file: {0}")]
    FileWrite(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, InsightError>;

/// Generates business insights from the exploratory report
///
/// Returns an empty list only for an empty dataset; any non-empty report
/// yields at least the performer and recommendation insights.
pub fn generate_insights(report: &ExploratoryReport) -> Vec<String> {
    let mut insights = Vec::new();

    if report.revenue.count == 0 {
        return insights;
    }

    temporal_insights(report, &mut insights);
    performer_insights(report, &mut insights);
    opportunity_insights(report, &mut insights);
    recommendation_insights(report, &mut insights);

    insights
}

/// Writes the insight list to `insights.txt`, one numbered entry per line
///
/// An empty list writes nothing and returns `Ok(())`.
pub fn write_insights(insights: &[String], output_dir: &Path) -> Result<()> {
    if insights.is_empty() {
        return Ok(());
    }

    let title = "Business Insights";
    let body: Vec<String> = insights
        .iter()
        .enumerate()
        .map(|(index, insight)| format!("{}. {}", index + 1, insight))
        .collect();

    let output = format!("{}\n{}\n\n{}\n", title, "=".repeat(title.len()), body.join("\n"));
    fs::write(output_dir.join(INSIGHTS_FILE_NAME), output)?;

    Ok(())
}

/// Best/worst month and half-over-half revenue trend
fn temporal_insights(report: &ExploratoryReport, insights: &mut Vec<String>) {
    let best = report
        .months
        .iter()
        .max_by(|a, b| a.revenue.total_cmp(&b.revenue));
    let worst = report
        .months
        .iter()
        .min_by(|a, b| a.revenue.total_cmp(&b.revenue));

    if let (Some(best), Some(worst)) = (best, worst) {
        insights.push(format!(
            "Peak sales month was {} with ${:.2} in revenue; the slowest was {} (${:.2}).",
            best.label, best.revenue, worst.label, worst.revenue
        ));
    }

    if report.months.len() >= 2 {
        let half = report.months.len() / 2;
        let first: f64 = report.months[..half].iter().map(|m| m.revenue).sum();
        let second: f64 = report.months[half..].iter().map(|m| m.revenue).sum();

        if first > 0.0 {
            let growth = (second - first) / first * 100.0;
            if growth >= 0.0 {
                insights.push(format!(
                    "Revenue grew {:.1}% in the second half of the period compared to the first.",
                    growth
                ));
            } else {
                insights.push(format!(
                    "Revenue declined {:.1}% in the second half of the period; investigate demand drivers.",
                    -growth
                ));
            }
        }
    }
}

/// Top region, product and salesperson
fn performer_insights(report: &ExploratoryReport, insights: &mut Vec<String>) {
    if let Some(top) = report.regions.first() {
        insights.push(format!(
            "{} is the strongest region, contributing {:.1}% of total revenue across {} orders.",
            top.name, top.share, top.orders
        ));
    }

    if let Some(top) = report.products.first() {
        insights.push(format!(
            "Best-selling product by revenue is {} ({:.1}% of total).",
            top.name, top.share
        ));
    }

    if let Some(top) = report.salespeople.first() {
        insights.push(format!(
            "Top salesperson is {} with ${:.2} in closed revenue ({:.1}% of total).",
            top.name, top.revenue, top.share
        ));

        if top.share > CONCENTRATION_THRESHOLD {
            insights.push(format!(
                "Revenue concentration risk: {} closes {:.1}% of all revenue; consider redistributing key accounts.",
                top.name, top.share
            ));
        }
    }
}

/// Weakest region and category as growth opportunities
fn opportunity_insights(report: &ExploratoryReport, insights: &mut Vec<String>) {
    if report.regions.len() > 1 {
        if let Some(weak) = report.regions.last() {
            insights.push(format!(
                "{} lags at {:.1}% revenue share; targeted campaigns there offer the clearest growth headroom.",
                weak.name, weak.share
            ));
        }
    }

    if report.categories.len() > 1 {
        if let Some(weak) = report.categories.last() {
            insights.push(format!(
                "The {} category underperforms ({:.1}% of revenue); review its pricing and promotion mix.",
                weak.name, weak.share
            ));
        }
    }
}

/// Strategic recommendations derived from the aggregates
fn recommendation_insights(report: &ExploratoryReport, insights: &mut Vec<String>) {
    insights.push(format!(
        "Average order value is ${:.2}; bundling accessories with big-ticket items could lift it.",
        report.revenue.mean
    ));

    if let Some(best) = report
        .months
        .iter()
        .max_by(|a, b| a.revenue.total_cmp(&b.revenue))
    {
        insights.push(format!(
            "Build up inventory and staffing ahead of {}, the historical demand peak.",
            best.label
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::exploratory::build_report;
    use crate::dataset::{SalesDataset, SalesRecord};
    use chrono::NaiveDate;

    fn record(month: u32, price: f64, salesperson: &str, region: &str) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2025, month, 15).unwrap(),
            product: "Nova X".to_string(),
            category: "Smartphones".to_string(),
            price,
            quantity: 1,
            salesperson: salesperson.to_string(),
            region: region.to_string(),
        }
    }

    fn sample_report() -> crate::analysis::exploratory::ExploratoryReport {
        build_report(&SalesDataset::from_records(vec![
            record(1, 100.0, "Ana", "North"),
            record(2, 200.0, "Ana", "North"),
            record(3, 400.0, "Bob", "South"),
            record(4, 800.0, "Cleo", "East"),
        ]))
    }

    #[test]
    fn test_insights_non_empty() {
        let insights = generate_insights(&sample_report());
        assert!(!insights.is_empty());
    }

    #[test]
    fn test_empty_dataset_yields_no_insights() {
        let report = build_report(&SalesDataset::from_records(Vec::new()));
        assert!(generate_insights(&report).is_empty());
    }

    #[test]
    fn test_peak_month_mentioned() {
        let insights = generate_insights(&sample_report());
        assert!(insights.iter().any(|i| i.contains("Apr 2025")));
    }

    #[test]
    fn test_growth_trend_direction() {
        // First half: 100 + 200 = 300, second half: 400 + 800 = 1200 -> +300%
        let insights = generate_insights(&sample_report());
        assert!(insights
            .iter()
            .any(|i| i.contains("grew") && i.contains("300.0%")));
    }

    #[test]
    fn test_concentration_warning_triggers() {
        // Cleo alone closes 800 of 1500 (53%), above the threshold
        let insights = generate_insights(&sample_report());
        assert!(insights.iter().any(|i| i.contains("concentration risk")));
        assert!(insights.iter().any(|i| i.contains("Cleo")));
    }

    #[test]
    fn test_write_insights_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let insights = vec!["First insight.".to_string(), "Second insight.".to_string()];

        write_insights(&insights, temp_dir.path()).unwrap();

        let contents =
            std::fs::read_to_string(temp_dir.path().join(INSIGHTS_FILE_NAME)).unwrap();
        assert!(contents.contains("Business Insights"));
        assert!(contents.contains("1. First insight."));
        assert!(contents.contains("2. Second insight."));
    }

    #[test]
    fn test_write_insights_empty_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_insights(&[], temp_dir.path()).unwrap();
        assert!(!temp_dir.path().join(INSIGHTS_FILE_NAME).exists());
    }
}
