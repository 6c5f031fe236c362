//! Domain Layer - log entries and the repository trait

pub mod entities;
pub mod repository;
