//! Domain Layer
//!
//! - Entities (WarrantyToken) and claim rules
//! - Value objects (ServerId)
//! - Repository trait

pub mod entities;
pub mod repository;
pub mod value_objects;
