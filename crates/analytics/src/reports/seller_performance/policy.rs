use contracts::dataset::{LineItem, Product};

use super::types::{BonusPolicy, RevenuePolicy, SellerView};

/// Базовая формула выручки: цена продажи × количество × (1 − скидка/100)
pub struct SimpleRevenue;

impl RevenuePolicy for SimpleRevenue {
    fn line_revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        item.sale_price * item.quantity as f64 * (1.0 - item.discount / 100.0)
    }
}

/// Бонус по месту в рейтинге прибыли
///
/// Проценты: первое место — 15%, второе и третье — 10%, последнее — 0%,
/// остальные — 5%. Правило последнего места перекрывает призовые: при
/// трёх продавцах третье место получает 0%, а не 10%; единственный
/// продавец — одновременно первый и последний — тоже получает 0%.
pub struct BonusByProfit;

impl BonusPolicy for BonusByProfit {
    fn bonus(&self, index: usize, total: usize, seller: &SellerView<'_>) -> f64 {
        let percent = if index + 1 == total {
            0.0
        } else if index == 0 {
            0.15
        } else if index <= 2 {
            0.10
        } else {
            0.05
        };
        seller.profit * percent
    }
}
