//! Presentation Layer - HTTP Routes

pub mod dto;
pub mod handlers;
pub mod router;
