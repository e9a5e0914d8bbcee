use contracts::report::TopProductEntry;
use std::collections::HashMap;

use super::types::{BonusPolicy, SellerStats};

/// Сортировка по убыванию прибыли и назначение бонусов по рангу
///
/// Сортировка стабильная, ничьи по прибыли сохраняют порядок индексатора.
/// Политика бонуса получает позицию с нуля, общее число продавцов и срез
/// показателей продавца.
pub fn rank_and_assign_bonuses(stats: &mut [SellerStats], calculate_bonus: &dyn BonusPolicy) {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = stats.len();
    for index in 0..total {
        let bonus = calculate_bonus.bonus(index, total, &stats[index].view());
        stats[index].bonus = bonus;
    }
}

/// Топ товаров продавца: по убыванию количества, не больше `limit`
///
/// Ничьи по количеству упорядочиваются по SKU, чтобы результат не зависел
/// от порядка обхода HashMap.
pub fn top_products(products_sold: &HashMap<String, u32>, limit: usize) -> Vec<TopProductEntry> {
    let mut entries: Vec<TopProductEntry> = products_sold
        .iter()
        .map(|(sku, &quantity)| TopProductEntry {
            sku: sku.clone(),
            quantity,
        })
        .collect();

    entries.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku)));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::seller_performance::policy::BonusByProfit;
    use contracts::dataset::Seller;

    fn stats(id: &str, profit: f64) -> SellerStats {
        let mut s = SellerStats::new(&Seller {
            id: id.to_string(),
            first_name: id.to_string(),
            last_name: "Продавец".to_string(),
        });
        s.profit = profit;
        s
    }

    #[test]
    fn sorts_by_profit_descending_and_assigns_bonuses() {
        let mut sellers = vec![stats("s1", 100.0), stats("s2", 300.0), stats("s3", 200.0)];
        rank_and_assign_bonuses(&mut sellers, &BonusByProfit);

        let ids: Vec<&str> = sellers.iter().map(|s| s.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s3", "s1"]);

        // 15% от 300, 10% от 200, последний ранг — 0%
        assert_eq!(sellers[0].bonus, 45.0);
        assert_eq!(sellers[1].bonus, 20.0);
        assert_eq!(sellers[2].bonus, 0.0);
    }

    #[test]
    fn equal_profits_keep_input_order() {
        let mut sellers = vec![stats("s1", 100.0), stats("s2", 100.0), stats("s3", 100.0)];
        rank_and_assign_bonuses(&mut sellers, &BonusByProfit);
        let ids: Vec<&str> = sellers.iter().map(|s| s.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn top_products_caps_at_limit() {
        let mut sold = HashMap::new();
        for n in 1..=15u32 {
            sold.insert(format!("SKU-{:02}", n), n);
        }
        let top = top_products(&sold, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].quantity, 15);
        assert_eq!(top[9].quantity, 6);
    }

    #[test]
    fn top_products_breaks_quantity_ties_by_sku() {
        let mut sold = HashMap::new();
        sold.insert("SKU-B".to_string(), 5);
        sold.insert("SKU-A".to_string(), 5);
        sold.insert("SKU-C".to_string(), 7);
        let top = top_products(&sold, 10);
        let skus: Vec<&str> = top.iter().map(|e| e.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU-C", "SKU-A", "SKU-B"]);
    }
}
