use contracts::dataset::{LineItem, Product, Seller};
use std::collections::HashMap;
use thiserror::Error;

use super::policy::{BonusByProfit, SimpleRevenue};

/// Ошибки конвейера расчёта отчёта
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Одна из обязательных коллекций датасета пуста
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    /// Опции собраны без единой политики
    #[error("options are not provided: no policies were set")]
    MissingOptions,

    /// Не хватает одной из двух политик
    #[error("invalid policy: {0} is not set")]
    InvalidPolicy(&'static str),

    /// Чек или строка чека ссылается на отсутствующий справочник
    #[error("unresolved reference: {entity} '{key}' is not present in the dataset")]
    UnresolvedReference { entity: &'static str, key: String },
}

/// Срез накопленных показателей продавца, передаваемый в политику бонуса
#[derive(Debug, Clone, Copy)]
pub struct SellerView<'a> {
    pub seller_id: &'a str,
    pub name: &'a str,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u32,
}

/// Политика расчёта выручки по одной строке чека
///
/// Вторым аргументом передаётся карточка товара; базовая формула её не
/// использует, но слот зарезервирован контрактом.
pub trait RevenuePolicy {
    fn line_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenuePolicy for F
where
    F: Fn(&LineItem, &Product) -> f64,
{
    fn line_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Политика расчёта бонуса по месту продавца в рейтинге
///
/// `index` — позиция с нуля после сортировки по убыванию прибыли,
/// `total` — общее число продавцов.
pub trait BonusPolicy {
    fn bonus(&self, index: usize, total: usize, seller: &SellerView<'_>) -> f64;
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerView<'_>) -> f64,
{
    fn bonus(&self, index: usize, total: usize, seller: &SellerView<'_>) -> f64 {
        self(index, total, seller)
    }
}

/// Пара политик, подключаемая к конвейеру
pub struct AnalyzeOptions {
    pub calculate_revenue: Box<dyn RevenuePolicy>,
    pub calculate_bonus: Box<dyn BonusPolicy>,
}

impl std::fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeOptions").finish_non_exhaustive()
    }
}

impl AnalyzeOptions {
    pub fn new(
        calculate_revenue: impl RevenuePolicy + 'static,
        calculate_bonus: impl BonusPolicy + 'static,
    ) -> Self {
        Self {
            calculate_revenue: Box::new(calculate_revenue),
            calculate_bonus: Box::new(calculate_bonus),
        }
    }

    /// Базовые политики: [`SimpleRevenue`] и [`BonusByProfit`]
    pub fn default_policies() -> Self {
        Self::new(SimpleRevenue, BonusByProfit)
    }

    pub fn builder() -> AnalyzeOptionsBuilder {
        AnalyzeOptionsBuilder::default()
    }
}

/// Пошаговая сборка опций с проверкой комплектности
#[derive(Default)]
pub struct AnalyzeOptionsBuilder {
    calculate_revenue: Option<Box<dyn RevenuePolicy>>,
    calculate_bonus: Option<Box<dyn BonusPolicy>>,
}

impl AnalyzeOptionsBuilder {
    pub fn calculate_revenue(mut self, policy: impl RevenuePolicy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(policy));
        self
    }

    pub fn calculate_bonus(mut self, policy: impl BonusPolicy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(policy));
        self
    }

    pub fn build(self) -> Result<AnalyzeOptions, AnalyzeError> {
        match (self.calculate_revenue, self.calculate_bonus) {
            (Some(calculate_revenue), Some(calculate_bonus)) => Ok(AnalyzeOptions {
                calculate_revenue,
                calculate_bonus,
            }),
            (None, None) => Err(AnalyzeError::MissingOptions),
            (None, Some(_)) => Err(AnalyzeError::InvalidPolicy("calculateRevenue")),
            (Some(_), None) => Err(AnalyzeError::InvalidPolicy("calculateBonus")),
        }
    }
}

/// Накопитель показателей одного продавца
///
/// Заполняется индексатором нулями, мутируется агрегатором, читается
/// ранжировщиком. Живёт только внутри одного вызова конвейера.
#[derive(Debug, Clone)]
pub struct SellerStats {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u32,
    /// SKU → суммарно проданное количество
    pub products_sold: HashMap<String, u32>,
    /// Назначается ранжировщиком после сортировки
    pub bonus: f64,
}

impl SellerStats {
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
            bonus: 0.0,
        }
    }

    pub fn view(&self) -> SellerView<'_> {
        SellerView {
            seller_id: &self.seller_id,
            name: &self.name,
            revenue: self.revenue,
            profit: self.profit,
            sales_count: self.sales_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_any_policy_is_missing_options() {
        let err = AnalyzeOptions::builder().build().unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingOptions));
    }

    #[test]
    fn builder_without_bonus_names_the_missing_policy() {
        let err = AnalyzeOptions::builder()
            .calculate_revenue(SimpleRevenue)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidPolicy("calculateBonus")));
    }

    #[test]
    fn builder_without_revenue_names_the_missing_policy() {
        let err = AnalyzeOptions::builder()
            .calculate_bonus(BonusByProfit)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidPolicy("calculateRevenue")));
    }

    #[test]
    fn closures_are_accepted_as_policies() {
        let options = AnalyzeOptions::builder()
            .calculate_revenue(|item: &LineItem, _product: &Product| {
                item.sale_price * item.quantity as f64
            })
            .calculate_bonus(|_index: usize, _total: usize, seller: &SellerView<'_>| {
                seller.profit * 0.5
            })
            .build()
            .unwrap();

        let item = LineItem {
            sku: "SKU-1".to_string(),
            quantity: 3,
            discount: 50.0,
            sale_price: 10.0,
        };
        let product = Product {
            sku: "SKU-1".to_string(),
            name: "Чайник".to_string(),
            purchase_price: 5.0,
            sale_price: 10.0,
        };
        // Замыкание игнорирует скидку — проверяем, что вызвана именно она
        assert_eq!(options.calculate_revenue.line_revenue(&item, &product), 30.0);
    }
}
