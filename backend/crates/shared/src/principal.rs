//! Authenticated admin principal
//!
//! Inserted into request extensions by the admin session middleware and read
//! by admin handlers that need to name the acting admin.

/// The admin behind the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub username: String,
}

impl AdminPrincipal {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
