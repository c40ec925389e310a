//! Stand-in account backend for the sign-up / log-in modal.
//!
//! No account service is reachable from this site yet. `DemoAuth` accepts
//! any validated login or sign-up and answers the way a real backend would,
//! so the modal's flow can be exercised end to end.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::signup::{AuthError, AuthService, AuthUser, Credentials, SignupForm};

#[derive(Clone, Copy, Debug, Default)]
pub struct DemoAuth;

impl AuthService for DemoAuth {
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        Ok(AuthUser { id: demo_user_id(&credentials.email), email: credentials.email.clone(), first_name: None })
    }

    async fn signup(&self, form: &SignupForm) -> Result<AuthUser, AuthError> {
        Ok(AuthUser {
            id: demo_user_id(&form.email),
            email: form.email.clone(),
            first_name: Some(form.first_name.clone()),
        })
    }

    async fn reset_password(&self, _email: &str) -> Result<(), AuthError> {
        Ok(())
    }

    async fn passwordless_login(&self, _email: &str) -> Result<(), AuthError> {
        Err(AuthError::Unavailable)
    }
}

fn demo_user_id(email: &str) -> String {
    format!("demo:{}", email.to_ascii_lowercase())
}
