use analytics::reports::seller_performance::{analyze_sales_data, AnalyzeOptions};
use analytics::shared::format::format_money;
use anyhow::Context;
use contracts::dataset::SalesDataset;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: analytics <dataset.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read dataset file '{}'", path))?;
    let dataset: SalesDataset = serde_json::from_str(&raw)
        .with_context(|| format!("cannot parse dataset file '{}'", path))?;

    tracing::info!(
        "dataset loaded: {} sellers, {} products, {} purchase records",
        dataset.sellers.len(),
        dataset.products.len(),
        dataset.purchase_records.len()
    );

    let report = analyze_sales_data(&dataset, &AnalyzeOptions::default_policies())?;

    println!(
        "{:<4} {:<28} {:>14} {:>14} {:>7} {:>12}",
        "#", "Продавец", "Выручка", "Прибыль", "Чеки", "Бонус"
    );
    for (index, row) in report.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:>14} {:>14} {:>7} {:>12}",
            index + 1,
            row.name,
            format_money(row.revenue),
            format_money(row.profit),
            row.sales_count,
            format_money(row.bonus)
        );
    }

    Ok(())
}
