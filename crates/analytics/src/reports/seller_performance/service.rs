use contracts::dataset::SalesDataset;
use contracts::report::SellerReport;

use super::{aggregator, indexer, ranker, validator};
use super::types::{AnalyzeError, AnalyzeOptions};
use crate::shared::format::round2;

/// Максимальная длина списка топ-товаров в отчёте
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Расчёт отчёта по эффективности продавцов
///
/// Чистая функция: каждый вызов работает на свежих накопителях, между
/// вызовами состояния нет. Строки отчёта идут по убыванию прибыли;
/// выручка, прибыль и бонус округлены до двух знаков. Любое нарушение
/// (форма датасета, ссылка на отсутствующий справочник) прерывает расчёт
/// без частичного результата.
pub fn analyze_sales_data(
    dataset: &SalesDataset,
    options: &AnalyzeOptions,
) -> Result<Vec<SellerReport>, AnalyzeError> {
    validator::validate(dataset)?;

    let (mut stats, seller_index) = indexer::build_seller_stats(&dataset.sellers);
    let product_index = indexer::build_product_index(&dataset.products);

    aggregator::fold_purchase_records(
        &dataset.purchase_records,
        &mut stats,
        &seller_index,
        &product_index,
        options.calculate_revenue.as_ref(),
    )?;

    ranker::rank_and_assign_bonuses(&mut stats, options.calculate_bonus.as_ref());

    tracing::debug!(
        "seller performance report: {} sellers, {} purchase records",
        stats.len(),
        dataset.purchase_records.len()
    );

    Ok(stats
        .iter()
        .map(|seller| SellerReport {
            seller_id: seller.seller_id.clone(),
            name: seller.name.clone(),
            revenue: round2(seller.revenue),
            profit: round2(seller.profit),
            sales_count: seller.sales_count,
            top_products: ranker::top_products(&seller.products_sold, TOP_PRODUCTS_LIMIT),
            bonus: round2(seller.bonus),
        })
        .collect())
}
