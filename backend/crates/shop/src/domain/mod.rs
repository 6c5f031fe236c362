//! Domain Layer

pub mod order;
pub mod payment_status;
pub mod plan;
pub mod ports;
pub mod repository;
pub mod value_object;
