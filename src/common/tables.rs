//! Report row types and ASCII table formatting
//!
//! This module provides the row types shared by the report writers and the
//! ASCII table rendering using the [`tabled`] crate. Report assembly lives in
//! the analysis modules.

use tabled::{Table, Tabled};

/// One row of a metric-by-column table (descriptive stats, correlations)
#[derive(Debug, Clone, Tabled)]
pub struct MetricRow {
    /// Row label
    #[tabled(rename = "Metric")]
    pub metric: String,
    /// Value for the price column
    #[tabled(rename = "Price")]
    pub price: String,
    /// Value for the quantity column
    #[tabled(rename = "Quantity")]
    pub quantity: String,
    /// Value for the revenue column
    #[tabled(rename = "Revenue")]
    pub revenue: String,
}

/// One row of a grouped aggregate table (regions, categories)
#[derive(Debug, Clone, Tabled)]
pub struct GroupRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Orders")]
    pub orders: usize,
    #[tabled(rename = "Units")]
    pub units: u64,
    #[tabled(rename = "Revenue")]
    pub revenue: String,
    #[tabled(rename = "Share")]
    pub share: String,
}

/// One row of the monthly revenue table
#[derive(Debug, Clone, Tabled)]
pub struct MonthRow {
    #[tabled(rename = "Month")]
    pub month: String,
    #[tabled(rename = "Orders")]
    pub orders: usize,
    #[tabled(rename = "Revenue")]
    pub revenue: String,
}

/// One row of a top-N ranking table
#[derive(Debug, Clone, Tabled)]
pub struct RankRow {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Revenue")]
    pub revenue: String,
    #[tabled(rename = "Share")]
    pub share: String,
}

/// Formats rows as an ASCII table with an optional underlined title
pub fn format_table<T: Tabled>(rows: &[T], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No data available".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

/// Formats a currency value for table cells
pub fn money_cell(value: f64) -> String {
    format!("${:.2}", value)
}

/// Formats a percentage value for table cells
pub fn percent_cell(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_with_title() {
        let rows = vec![
            GroupRow {
                name: "North".to_string(),
                orders: 10,
                units: 25,
                revenue: money_cell(1234.5),
                share: percent_cell(40.0),
            },
            GroupRow {
                name: "South".to_string(),
                orders: 5,
                units: 12,
                revenue: money_cell(600.0),
                share: percent_cell(20.0),
            },
        ];

        let table = format_table(&rows, Some("Revenue by Region"));
        assert!(table.contains("Revenue by Region"));
        assert!(table.contains("Name"));
        assert!(table.contains("North"));
        assert!(table.contains("$1234.50"));
        assert!(table.contains("20.00%"));

        let table_no_title = format_table(&rows, None);
        assert!(!table_no_title.contains("Revenue by Region"));
        assert!(table_no_title.contains("South"));
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<MonthRow> = Vec::new();
        assert_eq!(format_table(&rows, Some("Empty")), "No data available");
    }

    #[test]
    fn test_cell_formatters() {
        assert_eq!(money_cell(0.0), "$0.00");
        assert_eq!(money_cell(1234.567), "$1234.57");
        assert_eq!(percent_cell(33.333), "33.33%");
    }
}
