use contracts::dataset::SalesDataset;

use super::types::AnalyzeError;

/// Проверка формы датасета: все четыре коллекции должны быть непустыми
///
/// Отсутствие поля или неверный тип отлавливается serde при загрузке;
/// здесь остаётся только проверка на пустоту. При нарушении — ошибка до
/// любой обработки, частичных результатов не бывает.
pub fn validate(dataset: &SalesDataset) -> Result<(), AnalyzeError> {
    if dataset.customers.is_empty() {
        return Err(AnalyzeError::MalformedDataset(
            "customers is empty".to_string(),
        ));
    }
    if dataset.products.is_empty() {
        return Err(AnalyzeError::MalformedDataset(
            "products is empty".to_string(),
        ));
    }
    if dataset.sellers.is_empty() {
        return Err(AnalyzeError::MalformedDataset(
            "sellers is empty".to_string(),
        ));
    }
    if dataset.purchase_records.is_empty() {
        return Err(AnalyzeError::MalformedDataset(
            "purchase_records is empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dataset::{Customer, Product, PurchaseRecord, Seller};

    fn dataset() -> SalesDataset {
        SalesDataset {
            customers: vec![Customer {
                id: "c1".to_string(),
                first_name: "Анна".to_string(),
                last_name: "Иванова".to_string(),
            }],
            products: vec![Product {
                sku: "SKU-1".to_string(),
                name: "Чайник".to_string(),
                purchase_price: 50.0,
                sale_price: 100.0,
            }],
            sellers: vec![Seller {
                id: "s1".to_string(),
                first_name: "Пётр".to_string(),
                last_name: "Сидоров".to_string(),
            }],
            purchase_records: vec![PurchaseRecord {
                seller_id: "s1".to_string(),
                total_amount: 100.0,
                items: vec![],
            }],
        }
    }

    #[test]
    fn accepts_complete_dataset() {
        assert!(validate(&dataset()).is_ok());
    }

    #[test]
    fn rejects_empty_purchase_records() {
        let mut data = dataset();
        data.purchase_records.clear();
        let err = validate(&data).unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedDataset(ref field) if field.contains("purchase_records")));
    }

    #[test]
    fn rejects_empty_customers_even_though_unused() {
        let mut data = dataset();
        data.customers.clear();
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_empty_sellers_and_products() {
        let mut data = dataset();
        data.sellers.clear();
        assert!(validate(&data).is_err());

        let mut data = dataset();
        data.products.clear();
        assert!(validate(&data).is_err());
    }
}
