//! Sign In Use Case
//!
//! Checks the human-verification response, then the admin credentials, and
//! mints a signed session.

use std::net::IpAddr;
use std::sync::Arc;

use captcha::HumanVerifier;
use chrono::Utc;
use platform::crypto::secrets_match;

use crate::application::config::AuthConfig;
use crate::domain::session::AdminSession;
use crate::error::{AuthError, AuthResult};

/// Sign in input
#[derive(Debug, Clone, Default)]
pub struct SignInInput {
    pub username: String,
    pub password: String,
    /// Turnstile response token
    pub captcha_response: Option<String>,
    pub remote_ip: Option<IpAddr>,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub session: AdminSession,
}

/// Sign in use case
pub struct SignInUseCase<V>
where
    V: HumanVerifier,
{
    verifier: Arc<V>,
    config: Arc<AuthConfig>,
}

impl<V> SignInUseCase<V>
where
    V: HumanVerifier,
{
    pub fn new(verifier: Arc<V>, config: Arc<AuthConfig>) -> Self {
        Self { verifier, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let response = input
            .captcha_response
            .filter(|r| !r.is_empty())
            .ok_or(AuthError::MissingCaptcha)?;

        if !self.verifier.verify(&response, input.remote_ip).await? {
            return Err(AuthError::CaptchaRejected);
        }

        // Evaluate both so timing does not reveal which one was wrong
        let user_ok = secrets_match(&input.username, &self.config.admin_username);
        let pass_ok = secrets_match(&input.password, &self.config.admin_password);
        if !(user_ok & pass_ok) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AdminSession::new(
            input.username,
            Utc::now().timestamp_millis(),
            self.config.session_ttl_ms(),
        );
        let session_token = session.sign(&self.config.session_secret);

        tracing::info!(admin = %session.username, "Admin signed in");

        Ok(SignInOutput {
            session_token,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use captcha::CaptchaResult;

    struct FixedVerifier(bool);

    impl HumanVerifier for FixedVerifier {
        async fn verify(&self, _response: &str, _ip: Option<IpAddr>) -> CaptchaResult<bool> {
            Ok(self.0)
        }
    }

    fn use_case(human: bool) -> SignInUseCase<FixedVerifier> {
        SignInUseCase::new(
            Arc::new(FixedVerifier(human)),
            Arc::new(AuthConfig::with_random_secret("boss", "hunter2")),
        )
    }

    fn input(username: &str, password: &str) -> SignInInput {
        SignInInput {
            username: username.into(),
            password: password.into(),
            captcha_response: Some("ok".into()),
            remote_ip: None,
        }
    }

    #[tokio::test]
    async fn test_valid_credentials_mint_session() {
        let sut = use_case(true);
        let out = sut.execute(input("boss", "hunter2")).await.unwrap();
        assert_eq!(out.session.username, "boss");

        let verified = AdminSession::verify(
            &out.session_token,
            &sut.config.session_secret,
            Utc::now().timestamp_millis(),
        );
        assert_eq!(verified, Some(out.session));
    }

    #[tokio::test]
    async fn test_captcha_checked_before_credentials() {
        let missing = SignInInput {
            captcha_response: None,
            ..input("boss", "hunter2")
        };
        assert!(matches!(
            use_case(true).execute(missing).await,
            Err(AuthError::MissingCaptcha)
        ));
        assert!(matches!(
            use_case(false).execute(input("boss", "hunter2")).await,
            Err(AuthError::CaptchaRejected)
        ));
    }

    #[tokio::test]
    async fn test_wrong_credentials() {
        for (user, pass) in [("boss", "wrong"), ("other", "hunter2"), ("", "")] {
            assert!(matches!(
                use_case(true).execute(input(user, pass)).await,
                Err(AuthError::InvalidCredentials)
            ));
        }
    }
}
