use stockkeep_cli::{CliConfig, run_demo};
use stockkeep_infra::JsonFileRepository;
use stockkeep_inventory::InventoryStore;

fn main() {
    let config = CliConfig::from_env();
    stockkeep_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let repo = JsonFileRepository::new(&config.data_file);
    let mut store = InventoryStore::new();

    // Failures are logged, never turned into a non-zero exit.
    if let Err(err) = run_demo(&mut store, &repo, &config) {
        tracing::error!("Demo run failed: {:#}", err);
    }
}
