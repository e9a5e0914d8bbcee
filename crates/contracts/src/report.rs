use serde::{Deserialize, Serialize};

/// Позиция в топе товаров продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductEntry {
    pub sku: String,
    pub quantity: u32,
}

/// Итоговая строка отчёта по продавцу
///
/// Выручка, прибыль и бонус округлены до двух знаков; порядок строк в
/// отчёте — по убыванию прибыли.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u32,
    /// До 10 товаров, по убыванию проданного количества
    pub top_products: Vec<TopProductEntry>,
    pub bonus: f64,
}
