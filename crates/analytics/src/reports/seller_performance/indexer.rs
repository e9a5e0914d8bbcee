use contracts::dataset::{Product, Seller};
use std::collections::HashMap;

use super::types::SellerStats;

/// Заготовки накопителей по продавцам плюс индекс id → позиция в векторе
///
/// Индекс хранит позиции, а не ссылки: агрегатору нужен мутабельный доступ
/// к накопителям. Дубликаты id не валидируются — побеждает последняя запись.
pub fn build_seller_stats(sellers: &[Seller]) -> (Vec<SellerStats>, HashMap<String, usize>) {
    let mut stats = Vec::with_capacity(sellers.len());
    let mut index = HashMap::with_capacity(sellers.len());
    for seller in sellers {
        index.insert(seller.id.clone(), stats.len());
        stats.push(SellerStats::new(seller));
    }
    (stats, index)
}

/// Индекс SKU → карточка товара, один проход, без копирования карточек
pub fn build_product_index(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        index.insert(product.sku.as_str(), product);
    }
    index
}
