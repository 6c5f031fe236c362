//! Domain Layer

pub mod session;
