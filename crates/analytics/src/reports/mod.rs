pub mod seller_performance;
