//! Sales dataset types and on-disk persistence
//!
//! The dataset is persisted as zstd-compressed JSON (`sales-data.json.zst`).
//! Serialization goes straight through the encoder/decoder so the full table
//! never exists as an uncompressed byte buffer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use zstd::{Decoder, Encoder};

/// Default file name for the persisted dataset
pub const DATASET_FILE_NAME: &str = "sales-data.json.zst";

/// Compression level for the dataset artifact
const DATASET_ZSTD_LEVEL: i32 = 16;

/// Errors that can occur while persisting or loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read or write dataset file: {0}")]
    FileIo(#[from] std::io::Error),

    #[error("Failed to process zstd stream: {0}")]
    Compression(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, DatasetError>;

/// A single sales transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Transaction date
    pub date: NaiveDate,
    /// Product display name
    pub product: String,
    /// Product category
    pub category: String,
    /// Unit price in currency units, rounded to cents
    pub price: f64,
    /// Number of units sold
    pub quantity: u32,
    /// Salesperson who closed the sale
    pub salesperson: String,
    /// Sales region
    pub region: String,
}

impl SalesRecord {
    /// Total revenue for this transaction
    pub fn revenue(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Summary statistics for the entire dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of records in the table
    pub record_count: usize,
    /// Earliest transaction date
    pub first_date: NaiveDate,
    /// Latest transaction date
    pub last_date: NaiveDate,
    /// Number of distinct products sold
    pub distinct_products: usize,
    /// Number of distinct salespeople
    pub distinct_salespeople: usize,
    /// Number of distinct regions
    pub distinct_regions: usize,
    /// Total revenue across all records
    pub total_revenue: f64,
}

/// Complete sales dataset: the ordered record table plus derived summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDataset {
    /// All sales records, sorted ascending by date
    pub records: Vec<SalesRecord>,
    /// Overall statistics
    pub summary: DatasetSummary,
}

impl SalesDataset {
    /// Builds a dataset from a record table, deriving the summary
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let products: BTreeSet<&str> = records.iter().map(|r| r.product.as_str()).collect();
        let salespeople: BTreeSet<&str> = records.iter().map(|r| r.salesperson.as_str()).collect();
        let regions: BTreeSet<&str> = records.iter().map(|r| r.region.as_str()).collect();

        let summary = DatasetSummary {
            record_count: records.len(),
            first_date: records.first().map(|r| r.date).unwrap_or_default(),
            last_date: records.last().map(|r| r.date).unwrap_or_default(),
            distinct_products: products.len(),
            distinct_salespeople: salespeople.len(),
            distinct_regions: regions.len(),
            total_revenue: records.iter().map(SalesRecord::revenue).sum(),
        };

        Self { records, summary }
    }

    /// Saves the dataset as zstd-compressed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;

        let mut encoder = Encoder::new(file, DATASET_ZSTD_LEVEL)
            .map_err(|e| DatasetError::Compression(format!("Failed to create encoder: {}", e)))?;

        serde_json::to_writer(&mut encoder, self)?;

        encoder
            .finish()
            .map_err(|e| DatasetError::Compression(format!("Failed to finish stream: {}", e)))?;

        Ok(())
    }

    /// Loads a dataset previously written by [`SalesDataset::save`]
    ///
    /// Opens the compressed file, creates a ZStandard decoder and deserializes
    /// JSON directly from the decoder.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;

        let mut decoder = Decoder::new(file)
            .map_err(|e| DatasetError::Compression(format!("Failed to create decoder: {}", e)))?;

        let dataset: SalesDataset = serde_json::from_reader(&mut decoder)?;
        Ok(dataset)
    }
}
