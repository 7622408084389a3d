use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use stocktake_cli::menu;
use stocktake_inventory::{QueryEngine, consolidate};

/// Consolidate an inventory CSV and query shortages and expirations.
#[derive(Parser)]
#[command(name = "stocktake")]
#[command(version)]
struct Cli {
    /// Inventory CSV file (name,code,quantity,expiration; first row is a header)
    #[arg(default_value = "sample.csv")]
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    stocktake_observability::init();

    let cli = Cli::parse();

    let records = stocktake_ingest::read_records(&cli.path)
        .with_context(|| format!("failed to ingest {}", cli.path.display()))?;

    let engine = QueryEngine::new(consolidate(records));
    if engine.is_empty() {
        println!("No products found.");
        return Ok(());
    }
    tracing::debug!(items = engine.records().len(), "inventory consolidated");

    let stdin = std::io::stdin();
    menu::run(&engine, stdin.lock(), std::io::stdout())?;
    Ok(())
}
