//! Отчёт «эффективность продавцов»: выручка, прибыль, количество продаж,
//! топ товаров и бонус по месту в рейтинге прибыли.
//!
//! Конвейер из четырёх шагов поверх данных в памяти:
//! validator → indexer → aggregator → ranker. Формулы выручки и бонуса
//! подключаются снаружи через [`types::AnalyzeOptions`].

pub mod aggregator;
pub mod indexer;
pub mod policy;
pub mod ranker;
pub mod service;
pub mod types;
pub mod validator;

pub use policy::{BonusByProfit, SimpleRevenue};
pub use service::analyze_sales_data;
pub use types::{
    AnalyzeError, AnalyzeOptions, AnalyzeOptionsBuilder, BonusPolicy, RevenuePolicy, SellerStats,
    SellerView,
};
