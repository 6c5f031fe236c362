//! Application Layer - Use Cases

pub mod catalog;
pub mod check_payment;
pub mod config;
pub mod create_payment;
pub mod messages;
pub mod products;
pub mod provision;

pub use catalog::{ListPlansUseCase, ProductStats, ProductStatsUseCase};
pub use check_payment::{CheckPaymentUseCase, PaymentCheckOutcome};
pub use config::ShopConfig;
pub use create_payment::{CreatePaymentInput, CreatePaymentOutput, CreatePaymentUseCase};
pub use products::{
    CreateProductUseCase, DeleteProductUseCase, ProductInput, UpdateProductUseCase,
};
pub use provision::ProvisionServerUseCase;
