//! Sign-up / log-in modal: view routing and request lifecycle.
//!
//! DESIGN
//! ======
//! `ModalState` is a plain struct that the modal component keeps in a signal.
//! Requests are split into `begin` and `finish_*` steps so the component can
//! await the [`AuthService`] between two signal updates; the `submit_*`
//! drivers compose those steps for callers that own the state directly.
//!
//! ERROR HANDLING
//! ==============
//! Validation and service failures both land in `ModalState::error` and are
//! cleared by the next view switch, request, or close.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::fmt;
use std::time::Duration;

/// Success title when the caller supplies none.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success!";
/// Success title the modal shows after a login or sign-up.
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully!";
pub const REDIRECT_MESSAGE: &str = "Redirecting you now...";
pub const PASSWORDLESS_MESSAGE: &str = "Coming soon...";

/// How long the success view stays before the modal reports and closes.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Which panel the modal shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Welcome,
    Login,
    Signup,
    PasswordReset,
    Passwordless,
    Success,
}

/// Caller-supplied settings, kept across resets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalOptions {
    pub default_email: String,
    pub referral: Option<String>,
    /// Hide the close button and ignore every close request.
    pub disable_close: bool,
}

/// Account returned by a successful login or sign-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub referral: Option<String>,
}

/// Reasons a modal request fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingEmail,
    InvalidEmail,
    MissingPassword,
    MissingName,
    /// The service refused the request; the message is shown as-is.
    Rejected(String),
    Unavailable,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEmail => f.write_str("Please enter your email"),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
            Self::MissingPassword => f.write_str("Please enter your password"),
            Self::MissingName => f.write_str("Please enter your first and last name"),
            Self::Rejected(message) => f.write_str(message),
            Self::Unavailable => f.write_str("This option is not available yet"),
        }
    }
}

/// Account backend the modal talks to.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, AuthError>;

    async fn signup(&self, form: &SignupForm) -> Result<AuthUser, AuthError>;

    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    async fn passwordless_login(&self, email: &str) -> Result<(), AuthError>;
}

/// Validate login input.
///
/// # Errors
///
/// Returns the first rule the trimmed email or the password breaks.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, AuthError> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(Credentials { email, password: password.to_owned() })
}

/// Validate sign-up input.
///
/// # Errors
///
/// Returns the first rule the form breaks, names first.
pub fn validate_signup(form: SignupForm) -> Result<SignupForm, AuthError> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AuthError::MissingName);
    }
    let email = validate_email(&form.email)?;
    if form.password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(SignupForm { first_name: first_name.to_owned(), last_name: last_name.to_owned(), email, ..form })
}

/// Trimmed email, or the rule it breaks.
///
/// # Errors
///
/// Blank input is [`AuthError::MissingEmail`]; anything without `@` and a
/// dot is [`AuthError::InvalidEmail`].
pub fn validate_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    if !(email.contains('@') && email.contains('.')) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(email.to_owned())
}

/// Title of the success panel.
#[must_use]
pub fn success_title(message: Option<&str>) -> &str {
    message.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_SUCCESS_MESSAGE)
}

/// Greeting line of the success panel; absent without a name.
#[must_use]
pub fn success_greeting(user_name: Option<&str>) -> Option<String> {
    user_name.map(str::trim).filter(|n| !n.is_empty()).map(|n| format!("Welcome, {n}!"))
}

// =============================================================================
// MODAL STATE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    options: ModalOptions,
    pub view: AuthView,
    pub current_email: String,
    pub error: Option<AuthError>,
    pub loading: bool,
    pub success_user: Option<AuthUser>,
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new(ModalOptions::default())
    }
}

impl ModalState {
    #[must_use]
    pub fn new(options: ModalOptions) -> Self {
        Self {
            view: AuthView::Welcome,
            current_email: options.default_email.clone(),
            error: None,
            loading: false,
            success_user: None,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    #[must_use]
    pub fn referral(&self) -> Option<&str> {
        self.options.referral.as_deref()
    }

    #[must_use]
    pub fn can_close(&self) -> bool {
        !self.options.disable_close
    }

    pub fn show_welcome(&mut self) {
        self.switch_to(AuthView::Welcome);
    }

    pub fn show_login(&mut self) {
        self.switch_to(AuthView::Login);
    }

    pub fn show_signup(&mut self) {
        self.switch_to(AuthView::Signup);
    }

    pub fn show_password_reset(&mut self) {
        self.switch_to(AuthView::PasswordReset);
    }

    pub fn show_passwordless(&mut self) {
        self.switch_to(AuthView::Passwordless);
    }

    pub fn set_email(&mut self, email: &str) {
        email.clone_into(&mut self.current_email);
    }

    /// Close request from the close button, the overlay, or Escape.
    ///
    /// Returns `false`, leaving everything as it was, when closing is
    /// disabled. Otherwise the state returns to its initial view.
    pub fn close(&mut self) -> bool {
        if !self.can_close() {
            return false;
        }
        self.reset();
        true
    }

    /// Back to the initial view with no error, request, or user.
    pub fn reset(&mut self) {
        *self = Self::new(self.options.clone());
    }

    /// Record a failure raised before any request was sent.
    pub fn fail(&mut self, error: AuthError) {
        self.error = Some(error);
    }

    /// Mark a request in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply a login or sign-up result; success moves to the success view.
    pub fn finish_auth(&mut self, result: Result<AuthUser, AuthError>) -> Option<AuthUser> {
        self.loading = false;
        match result {
            Ok(user) => {
                self.current_email.clone_from(&user.email);
                self.success_user = Some(user.clone());
                self.view = AuthView::Success;
                Some(user)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Apply a password reset result; success returns to the login view.
    pub fn finish_reset(&mut self, result: Result<(), AuthError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                self.show_login();
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Apply a passwordless login result; the view does not change.
    pub fn finish_passwordless(&mut self, result: Result<(), AuthError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    #[must_use]
    pub fn success_greeting(&self) -> Option<String> {
        success_greeting(self.success_user.as_ref().and_then(|u| u.first_name.as_deref()))
    }

    pub async fn submit_login<A: AuthService>(&mut self, auth: &A, email: &str, password: &str) -> Option<AuthUser> {
        let credentials = match validate_credentials(email, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.fail(e);
                return None;
            }
        };
        if !self.begin() {
            return None;
        }
        let result = auth.login(&credentials).await;
        self.finish_auth(result)
    }

    pub async fn submit_signup<A: AuthService>(&mut self, auth: &A, form: SignupForm) -> Option<AuthUser> {
        let form = match validate_signup(form) {
            Ok(form) => form,
            Err(e) => {
                self.fail(e);
                return None;
            }
        };
        if !self.begin() {
            return None;
        }
        let result = auth.signup(&form).await;
        self.finish_auth(result)
    }

    pub async fn submit_reset<A: AuthService>(&mut self, auth: &A, email: &str) -> bool {
        let email = match validate_email(email) {
            Ok(email) => email,
            Err(e) => {
                self.fail(e);
                return false;
            }
        };
        if !self.begin() {
            return false;
        }
        let result = auth.reset_password(&email).await;
        self.finish_reset(result)
    }

    pub async fn submit_passwordless<A: AuthService>(&mut self, auth: &A, email: &str) -> bool {
        let email = match validate_email(email) {
            Ok(email) => email,
            Err(e) => {
                self.fail(e);
                return false;
            }
        };
        if !self.begin() {
            return false;
        }
        let result = auth.passwordless_login(&email).await;
        self.finish_passwordless(result)
    }

    fn switch_to(&mut self, view: AuthView) {
        self.view = view;
        self.error = None;
    }
}
