use dotenvy::dotenv;
use herdbook::core::{livestock, market, payroll, report, valuation};
use herdbook::store::{RecordStore, migrate};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> herdbook::errors::Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let config = herdbook::config::load_default_config()?;
    info!(owner = %config.ranch.owner_name, data_dir = %config.storage.data_dir.display(), "configuration loaded");

    // 4. Initialize the record store, then seed and migrate the tables
    let store = RecordStore::new(config.storage.clone());
    migrate::run_startup(&store, &config)?;
    info!("record store initialized");

    // 5. Recompute and print the profitability snapshot
    let animals = livestock::list_active(&store)?;
    let quote = market::latest(&store)?;
    let payroll_total = payroll::payroll_total(&store)?;
    let snapshot = valuation::compute_snapshot(&animals, &quote, payroll_total, &config.pricing);

    println!("{}", report::snapshot_summary(&snapshot));

    Ok(())
}
