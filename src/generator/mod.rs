//! Synthetic sales dataset generation
//!
//! Fabricates one year of technology sales records from the product catalog.
//! Generation is fully deterministic for a given [`GeneratorConfig`]: the same
//! seed, record count and end date always produce the same dataset.

pub mod catalog;

use crate::dataset::{SalesDataset, SalesRecord};
use catalog::{MONTH_DEMAND, PRODUCTS, QUANTITY_WEIGHTS, REGIONS, SALES_TEAM_SIZE};
use chrono::{Datelike, Duration, NaiveDate};
use fake::faker::name::en::Name;
use fake::Fake;
use indicatif::ProgressBar;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default RNG seed; runs without `--seed` are still reproducible
pub const DEFAULT_SEED: u64 = 42;

/// Length of the generated date window in days
pub const WINDOW_DAYS: i64 = 365;

/// Per-sale price perturbation applied to the catalog base price
const PRICE_JITTER: f64 = 0.10;

/// Settings for a single generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of records to generate
    pub records: usize,
    /// RNG seed; identical configs produce identical datasets
    pub seed: u64,
    /// Last day of the one-year window
    pub end_date: NaiveDate,
}

/// Generates a synthetic sales dataset
///
/// Dates are sampled over the one-year window ending at `config.end_date`,
/// weighted by [`MONTH_DEMAND`] so seasonal patterns show up in the monthly
/// aggregates. Products, regions, quantities and salespeople are drawn from
/// weighted distributions; unit prices are the catalog base price perturbed
/// by ±10% and rounded to cents. Records are returned sorted by date.
pub fn generate_sales_data(config: &GeneratorConfig) -> SalesDataset {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let roster = build_roster(&mut rng);
    let start_date = config.end_date - Duration::days(WINDOW_DAYS - 1);

    // Day weights follow the monthly demand curve. All weights are positive
    // constants, so WeightedIndex construction cannot fail.
    let day_weights: Vec<f64> = (0..WINDOW_DAYS)
        .map(|offset| {
            let date = start_date + Duration::days(offset);
            MONTH_DEMAND[date.month0() as usize]
        })
        .collect();
    let day_dist = WeightedIndex::new(&day_weights).expect("day weights are positive");
    let product_dist =
        WeightedIndex::new(PRODUCTS.iter().map(|p| p.weight)).expect("product weights are positive");
    let region_dist =
        WeightedIndex::new(REGIONS.iter().map(|r| r.1)).expect("region weights are positive");
    let quantity_dist =
        WeightedIndex::new(QUANTITY_WEIGHTS).expect("quantity weights are positive");
    let roster_dist = WeightedIndex::new(roster_weights(roster.len()))
        .expect("roster weights are positive");

    let progress = ProgressBar::new(config.records as u64);
    let mut records = Vec::with_capacity(config.records);

    for _ in 0..config.records {
        let date = start_date + Duration::days(day_dist.sample(&mut rng) as i64);
        let entry = &PRODUCTS[product_dist.sample(&mut rng)];
        let jitter = rng.gen_range(1.0 - PRICE_JITTER..=1.0 + PRICE_JITTER);

        records.push(SalesRecord {
            date,
            product: entry.name.to_string(),
            category: entry.category.to_string(),
            price: round_cents(entry.base_price * jitter),
            quantity: quantity_dist.sample(&mut rng) as u32 + 1,
            salesperson: roster[roster_dist.sample(&mut rng)].clone(),
            region: REGIONS[region_dist.sample(&mut rng)].0.to_string(),
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    // Stable sort keeps the sampling order for same-day transactions
    records.sort_by_key(|record| record.date);

    SalesDataset::from_records(records)
}

/// Builds the salesperson roster with fabricated names
fn build_roster(rng: &mut StdRng) -> Vec<String> {
    (0..SALES_TEAM_SIZE)
        .map(|_| Name().fake_with_rng(rng))
        .collect()
}

/// Geometric weights so a few salespeople dominate, like real sales teams
fn roster_weights(len: usize) -> Vec<f64> {
    (0..len).map(|i| 0.75f64.powi(i as i32)).collect()
}

/// Rounds a currency value to cents
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn test_config(records: usize) -> GeneratorConfig {
        GeneratorConfig {
            records,
            seed: DEFAULT_SEED,
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(1000)]
    fn test_exact_record_count(#[case] count: usize) {
        let dataset = generate_sales_data(&test_config(count));
        assert_eq!(dataset.records.len(), count);
        assert_eq!(dataset.summary.record_count, count);
    }

    #[test]
    fn test_value_ranges() {
        let dataset = generate_sales_data(&test_config(500));
        let start = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap() - Duration::days(WINDOW_DAYS - 1);
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        for record in &dataset.records {
            assert!(record.price > 0.0);
            assert!((1..=10).contains(&record.quantity));
            assert!(record.date >= start && record.date <= end);
            // Prices stay within the catalog's jitter band
            let base = PRODUCTS
                .iter()
                .find(|p| p.name == record.product)
                .map(|p| p.base_price)
                .unwrap();
            assert!(record.price >= round_cents(base * (1.0 - PRICE_JITTER)));
            assert!(record.price <= round_cents(base * (1.0 + PRICE_JITTER)));
        }
    }

    #[test]
    fn test_records_sorted_by_date() {
        let dataset = generate_sales_data(&test_config(300));
        assert!(dataset
            .records
            .windows(2)
            .all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn test_category_matches_catalog() {
        let dataset = generate_sales_data(&test_config(200));
        for record in &dataset.records {
            assert_eq!(
                catalog::category_of(&record.product),
                Some(record.category.as_str())
            );
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = generate_sales_data(&test_config(250));
        let b = generate_sales_data(&test_config(250));
        assert_eq!(a.records, b.records);

        let mut other = test_config(250);
        other.seed = DEFAULT_SEED + 1;
        let c = generate_sales_data(&other);
        assert_ne!(a.records, c.records);
    }

    #[test]
    fn test_roster_size_and_variety() {
        let dataset = generate_sales_data(&test_config(1000));
        let salespeople: BTreeSet<&str> = dataset
            .records
            .iter()
            .map(|r| r.salesperson.as_str())
            .collect();

        assert!(salespeople.len() <= SALES_TEAM_SIZE);
        // With 1000 draws at least half the roster should appear
        assert!(salespeople.len() >= SALES_TEAM_SIZE / 2);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(10.006), 10.01);
        assert_eq!(round_cents(10.004), 10.0);
        assert_eq!(round_cents(99.999), 100.0);
    }
}
