//! Numeric helpers for descriptive statistics and correlation
//!
//! Percentiles use linear interpolation between closest ranks, matching the
//! convention of mainstream statistics libraries. All helpers return 0.0 for
//! inputs that have no meaningful answer (empty slices, zero variance) so
//! callers never have to branch on degenerate data.

/// Descriptive statistics for a single numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
    /// Largest value
    pub max: f64,
}

impl DescriptiveStats {
    /// Computes the full set of descriptive statistics for a column
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std_dev: 0.0,
                min: 0.0,
                p25: 0.0,
                median: 0.0,
                p75: 0.0,
                max: 0.0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            count: sorted.len(),
            mean: mean(&sorted),
            std_dev: sample_std_dev(&sorted),
            min: sorted[0],
            p25: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            p75: percentile(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); 0.0 for fewer than 2 values
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Percentile of an ascending-sorted slice using linear interpolation
///
/// `p` is in 0.0..=100.0. Returns 0.0 for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Pearson correlation coefficient between two equal-length series
///
/// Returns 0.0 when the lengths differ, fewer than 2 points are given, or
/// either series has zero variance.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    covariance / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[2.0, 4.0, 6.0]) - 4.0).abs() < EPS);
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[5.0]), 0.0);
        // Known fixture: values 2, 4, 4, 4, 5, 5, 7, 9 have sample std ~2.138
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_std_dev(&values) - 2.138089935).abs() < 1e-6);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(25.0, 2.0)]
    #[case(50.0, 3.0)]
    #[case(75.0, 4.0)]
    #[case(100.0, 5.0)]
    fn test_percentile_exact_ranks(#[case] p: f64, #[case] expected: f64) {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile(&sorted, p) - expected).abs() < EPS);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        // rank = 0.5 * 3 = 1.5 -> halfway between 20 and 30
        assert!((percentile(&sorted, 50.0) - 25.0).abs() < EPS);
    }

    #[test]
    fn test_percentile_degenerate() {
        assert_eq!(percentile(&[], 50.0), 0.0);
        assert_eq!(percentile(&[7.0], 99.0), 7.0);
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson_correlation(&xs, &ys) - 1.0).abs() < EPS);

        let inverse = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson_correlation(&xs, &inverse) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_pearson_degenerate() {
        assert_eq!(pearson_correlation(&[1.0], &[2.0]), 0.0);
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[3.0]), 0.0);
        // Zero variance
        assert_eq!(pearson_correlation(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_descriptive_stats() {
        let values = [4.0, 1.0, 3.0, 2.0, 5.0];
        let stats = DescriptiveStats::from_values(&values);

        assert_eq!(stats.count, 5);
        assert!((stats.mean - 3.0).abs() < EPS);
        assert!((stats.min - 1.0).abs() < EPS);
        assert!((stats.p25 - 2.0).abs() < EPS);
        assert!((stats.median - 3.0).abs() < EPS);
        assert!((stats.p75 - 4.0).abs() < EPS);
        assert!((stats.max - 5.0).abs() < EPS);
        // Sample std of 1..5 is sqrt(2.5)
        assert!((stats.std_dev - 2.5f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        let stats = DescriptiveStats::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.max, 0.0);
    }
}
