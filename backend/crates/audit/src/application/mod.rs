//! Application Layer - admin log queries

pub mod queries;

pub use queries::{
    ERROR_LOG_TAIL, ErrorLogsView, LogQueries, PAYMENT_LOG_TAIL, PaymentLogsView, SERVER_LOG_TAIL,
    ServerLogsView,
};
