//! Shared constants for the analysis modules

/// Month labels for chart axes and report tables
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of entries shown in top-N ranking tables
pub const TOP_N: usize = 5;

/// Salesperson revenue share (percent) above which concentration risk is flagged
pub const CONCENTRATION_THRESHOLD: f64 = 25.0;

/// Metrics covered by the correlation matrix, in matrix order
pub const CORRELATION_METRICS: [&str; 3] = ["Price", "Quantity", "Revenue"];
