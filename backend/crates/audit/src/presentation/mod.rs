//! Presentation Layer
//!
//! Admin HTTP handlers for the audit log.

pub mod dto;
pub mod handlers;
pub mod router;
