mod analysis;
mod common;
mod dataset;
mod generator;

use analysis::exploratory::ExploratoryError;
use analysis::insights::InsightError;
use analysis::{build_report, generate_insights, write_exploratory_report, write_insights};
use argh::FromArgs;
use common::plots::render_dashboard;
use common::PlotError;
use dataset::{DatasetError, SalesDataset, DATASET_FILE_NAME};
use generator::{generate_sales_data, GeneratorConfig, DEFAULT_SEED};
use std::path::PathBuf;
use thiserror::Error;

/// Synthetic sales dataset generator with statistical analysis and visualization
#[derive(FromArgs, Debug)]
pub struct Args {
    /// number of sales records to generate (default: 1000)
    #[argh(option, short = 'n', default = "1000")]
    records: usize,

    /// rng seed for reproducible datasets (default: 42)
    #[argh(option, short = 's', default = "DEFAULT_SEED")]
    seed: u64,

    /// directory for the dataset, reports and charts (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// analyze an existing sales-data.json.zst instead of generating
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// skip chart rendering (for environments without font support)
    #[argh(switch)]
    skip_plots: bool,
}

/// Errors that can occur during the analysis pipeline
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Exploratory analysis error: {0}")]
    Exploratory(#[from] ExploratoryError),

    #[error("Insight generation error: {0}")]
    Insight(#[from] InsightError),

    #[error("Plot generation error: {0}")]
    Plot(#[from] PlotError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    println!("🚀 Starting sales data analysis...");

    if !args.output_dir.exists() {
        std::fs::create_dir_all(&args.output_dir).map_err(DatasetError::FileIo)?;
    }

    // Stage 1: obtain the dataset, either by loading or generating
    let dataset = match &args.input {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Input file does not exist: {}", path.display());
                std::process::exit(1);
            }
            println!("📂 Stage 1: Loading dataset from {}", path.display());
            SalesDataset::load(path)?
        }
        None => {
            println!("🧪 Stage 1: Generating {} sales records", args.records);
            let config = GeneratorConfig {
                records: args.records,
                seed: args.seed,
                end_date: chrono::Utc::now().date_naive(),
            };
            let dataset = generate_sales_data(&config);

            let dataset_path = args.output_dir.join(DATASET_FILE_NAME);
            dataset.save(&dataset_path)?;
            println!("   💾 Dataset saved to {}", dataset_path.display());
            dataset
        }
    };

    if dataset.records.is_empty() {
        println!("⚠️  Dataset is empty, nothing to analyze");
        return Ok(());
    }

    // Stage 2: exploratory analysis
    println!("📊 Stage 2: Exploratory analysis");
    let report = build_report(&dataset);
    write_exploratory_report(&report, &args.output_dir)?;

    // Stage 3: dashboard charts
    if args.skip_plots {
        println!("🖼️  Stage 3: Chart rendering skipped (--skip-plots)");
    } else {
        println!("🖼️  Stage 3: Rendering dashboard charts");
        render_dashboard(&dataset, &report, &args.output_dir)?;
    }

    // Stage 4: business insights
    println!("💡 Stage 4: Business insights");
    let insights = generate_insights(&report);
    write_insights(&insights, &args.output_dir)?;
    for insight in &insights {
        println!("   • {}", insight);
    }

    println!("\n🎉 Analysis complete!");
    println!("   📈 Records analyzed: {}", dataset.summary.record_count);
    println!(
        "   📅 Date range: {} to {}",
        dataset.summary.first_date, dataset.summary.last_date
    );
    println!("   💰 Total revenue: ${:.2}", dataset.summary.total_revenue);
    println!("   📂 Output directory: {}", args.output_dir.display());

    Ok(())
}
