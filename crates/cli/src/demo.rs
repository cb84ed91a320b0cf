//! The fixed demonstration sequence run by the `stockkeep` binary.

use anyhow::Context;

use stockkeep_inventory::{AuditSink, InventoryStore, StockReport, StockRepository};

use crate::config::CliConfig;

/// What the demonstration observed, for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub apple_stock: i64,
    pub low_items: Vec<String>,
    pub report: StockReport,
}

/// Run add, remove, query, save, load and report against `store`.
///
/// Only invalid `add` arguments abort the run; removal outcomes and
/// persistence failures are logged by the store and the run continues.
pub fn run_demo<A, R>(
    store: &mut InventoryStore<A>,
    repo: &R,
    config: &CliConfig,
) -> anyhow::Result<DemoSummary>
where
    A: AuditSink,
    R: StockRepository + ?Sized,
{
    store.add("apple", 10).context("adding apple")?;
    store.add("banana", -2).context("adding banana")?;
    // Removal failures are logged by the store and do not stop the run.
    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    let apple_stock = store.quantity("apple");
    tracing::info!("Apple stock: {}", apple_stock);

    let low_items: Vec<String> = store
        .low_stock(config.low_stock_threshold)
        .into_iter()
        .map(|name| name.into_inner())
        .collect();
    tracing::info!("Low items: {:?}", low_items);

    // Outcomes are already logged by the store.
    let _ = store.save(repo);
    let _ = store.load(repo);
    let report = store.report();

    tracing::info!("All operations completed successfully.");

    Ok(DemoSummary {
        apple_stock,
        low_items,
        report,
    })
}
