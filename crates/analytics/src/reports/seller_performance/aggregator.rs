use contracts::dataset::{Product, PurchaseRecord};
use std::collections::HashMap;

use super::types::{AnalyzeError, RevenuePolicy, SellerStats};

/// Свёртка чеков в накопители продавцов
///
/// На каждый чек: +1 к числу продаж и `total_amount` к выручке — сумма
/// берётся из чека как есть, по строкам не пересчитывается. На каждую
/// строку: себестоимость = закупочная цена × количество, выручка строки —
/// через политику, разница идёт в прибыль, количество — в учёт проданных
/// товаров. Накопители мутируются на месте; повторный вызов на тех же
/// накопителях удвоил бы суммы, поэтому конвейер вызывает свёртку ровно
/// один раз.
pub fn fold_purchase_records(
    records: &[PurchaseRecord],
    stats: &mut [SellerStats],
    seller_index: &HashMap<String, usize>,
    product_index: &HashMap<&str, &Product>,
    calculate_revenue: &dyn RevenuePolicy,
) -> Result<(), AnalyzeError> {
    for record in records {
        let &position = seller_index.get(&record.seller_id).ok_or_else(|| {
            AnalyzeError::UnresolvedReference {
                entity: "seller",
                key: record.seller_id.clone(),
            }
        })?;
        let seller = &mut stats[position];

        seller.sales_count += 1;
        seller.revenue += record.total_amount;

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                AnalyzeError::UnresolvedReference {
                    entity: "product",
                    key: item.sku.clone(),
                }
            })?;

            let cost = product.purchase_price * item.quantity as f64;
            let revenue = calculate_revenue.line_revenue(item, product);
            seller.profit += revenue - cost;

            *seller.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
        }
    }
    Ok(())
}
