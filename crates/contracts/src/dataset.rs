use serde::{Deserialize, Serialize};

/// Покупатель (присутствует в датасете, отчётом не используется)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Карточка товара (справочник, индексируется по SKU)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    /// Закупочная цена за единицу (себестоимость)
    pub purchase_price: f64,
    /// Цена по каталогу; в строке чека может отличаться
    pub sale_price: f64,
}

/// Продавец (справочник, индексируется по id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Строка чека: один товар с количеством, скидкой и ценой продажи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    /// Скидка в процентах, 0–100
    pub discount: f64,
    /// Цена продажи за единицу в этой строке
    pub sale_price: f64,
}

/// Чек: одна покупка, привязанная к продавцу
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// Итоговая сумма чека из источника; не пересчитывается по строкам
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

/// Входной датасет целиком (обычно загружается из JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}
