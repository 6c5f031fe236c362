//! Check Session Use Case
//!
//! Verifies the signed session cookie.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::session::AdminSession;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Check if session is valid and return it
    pub fn execute(&self, session_token: Option<&str>) -> AuthResult<AdminSession> {
        let token = session_token.ok_or(AuthError::SessionInvalid)?;
        AdminSession::verify(
            token,
            &self.config.session_secret,
            Utc::now().timestamp_millis(),
        )
        .ok_or(AuthError::SessionInvalid)
    }

    /// Just check if session is valid (returns bool)
    pub fn is_valid(&self, session_token: Option<&str>) -> bool {
        self.execute(session_token).is_ok()
    }
}
