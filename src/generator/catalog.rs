//! Product catalog and market weighting tables used by the generator
//!
//! Weights are relative sampling frequencies, not probabilities; they are fed
//! into [`rand::distributions::WeightedIndex`] as-is.

/// A product available for sale
#[derive(Debug)]
pub struct CatalogEntry {
    /// Product display name
    pub name: &'static str,
    /// Product category
    pub category: &'static str,
    /// List price before the per-sale perturbation
    pub base_price: f64,
    /// Relative sale frequency
    pub weight: f64,
}

/// Technology product catalog
///
/// Cheap accessories sell far more often than big-ticket laptops, which keeps
/// the generated order-size and revenue distributions realistic.
pub const PRODUCTS: &[CatalogEntry] = &[
    CatalogEntry { name: "ProBook 14", category: "Laptops", base_price: 899.00, weight: 3.0 },
    CatalogEntry { name: "UltraSlim 15", category: "Laptops", base_price: 1199.00, weight: 2.5 },
    CatalogEntry { name: "Gaming Beast 17", category: "Laptops", base_price: 1899.00, weight: 1.5 },
    CatalogEntry { name: "Air 13", category: "Laptops", base_price: 999.00, weight: 3.0 },
    CatalogEntry { name: "Nova X", category: "Smartphones", base_price: 799.00, weight: 5.0 },
    CatalogEntry { name: "Nova SE", category: "Smartphones", base_price: 499.00, weight: 6.0 },
    CatalogEntry { name: "Pulse 5G", category: "Smartphones", base_price: 649.00, weight: 4.0 },
    CatalogEntry { name: "PadOne 11", category: "Tablets", base_price: 549.00, weight: 3.5 },
    CatalogEntry { name: "PadOne Mini", category: "Tablets", base_price: 399.00, weight: 3.5 },
    CatalogEntry { name: "ViewMax 27", category: "Monitors", base_price: 329.00, weight: 4.0 },
    CatalogEntry { name: "ViewMax 32 4K", category: "Monitors", base_price: 499.00, weight: 2.5 },
    CatalogEntry { name: "UltraWide 34", category: "Monitors", base_price: 599.00, weight: 2.0 },
    CatalogEntry { name: "Wireless Mouse", category: "Accessories", base_price: 29.99, weight: 10.0 },
    CatalogEntry { name: "Mechanical Keyboard", category: "Accessories", base_price: 89.99, weight: 7.0 },
    CatalogEntry { name: "USB-C Hub", category: "Accessories", base_price: 49.99, weight: 8.0 },
    CatalogEntry { name: "Laptop Stand", category: "Accessories", base_price: 39.99, weight: 6.0 },
    CatalogEntry { name: "HD Webcam", category: "Accessories", base_price: 59.99, weight: 5.0 },
    CatalogEntry { name: "NoiseFree Headphones", category: "Audio", base_price: 199.00, weight: 4.5 },
    CatalogEntry { name: "TrueBuds", category: "Audio", base_price: 129.00, weight: 6.0 },
    CatalogEntry { name: "StudioMic", category: "Audio", base_price: 149.00, weight: 2.5 },
    CatalogEntry { name: "1TB NVMe SSD", category: "Components", base_price: 119.00, weight: 5.0 },
    CatalogEntry { name: "32GB RAM Kit", category: "Components", base_price: 99.00, weight: 4.0 },
];

/// Sales regions with relative order volume
pub const REGIONS: &[(&str, f64)] = &[
    ("North", 0.30),
    ("South", 0.22),
    ("East", 0.14),
    ("West", 0.12),
    ("Central", 0.22),
];

/// Relative demand per calendar month (January through December)
///
/// Q4 holiday boost, mild summer dip. Applied to the transaction date
/// distribution so the monthly revenue chart and trend insights have signal.
pub const MONTH_DEMAND: [f64; 12] = [
    0.80, 0.75, 0.90, 0.95, 1.00, 0.85, 0.70, 0.75, 1.00, 1.10, 1.35, 1.50,
];

/// Number of salespeople on the roster
pub const SALES_TEAM_SIZE: usize = 8;

/// Relative frequencies for order quantities 1 through 10, skewed small
pub const QUANTITY_WEIGHTS: [f64; 10] = [30.0, 22.0, 15.0, 10.0, 8.0, 5.0, 4.0, 3.0, 1.5, 1.5];

/// Looks up the catalog category for a product name, if it exists
pub fn category_of(product: &str) -> Option<&'static str> {
    PRODUCTS
        .iter()
        .find(|entry| entry.name == product)
        .map(|entry| entry.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(!PRODUCTS.is_empty());
        for entry in PRODUCTS {
            assert!(entry.base_price > 0.0, "bad price for {}", entry.name);
            assert!(entry.weight > 0.0, "bad weight for {}", entry.name);
        }
    }

    #[test]
    fn test_region_weights_sum_to_one() {
        let total: f64 = REGIONS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("ProBook 14"), Some("Laptops"));
        assert_eq!(category_of("TrueBuds"), Some("Audio"));
        assert_eq!(category_of("Unknown Widget"), None);
    }
}
