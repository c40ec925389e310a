use super::*;
use std::cell::RefCell;

// =============================================================
// ScriptedAuth
// =============================================================

#[derive(Default)]
struct ScriptedAuth {
    reject: Option<AuthError>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedAuth {
    fn rejecting(error: AuthError) -> Self {
        Self { reject: Some(error), calls: RefCell::default() }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn outcome<T>(&self, call: String, ok: T) -> Result<T, AuthError> {
        self.calls.borrow_mut().push(call);
        match &self.reject {
            Some(e) => Err(e.clone()),
            None => Ok(ok),
        }
    }
}

impl AuthService for ScriptedAuth {
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let user = AuthUser { id: "u1".to_owned(), email: credentials.email.clone(), first_name: Some("Sam".to_owned()) };
        self.outcome(format!("login {}", credentials.email), user)
    }

    async fn signup(&self, form: &SignupForm) -> Result<AuthUser, AuthError> {
        let user = AuthUser { id: "u2".to_owned(), email: form.email.clone(), first_name: Some(form.first_name.clone()) };
        self.outcome(format!("signup {} ref={:?}", form.email, form.referral), user)
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.outcome(format!("reset {email}"), ())
    }

    async fn passwordless_login(&self, email: &str) -> Result<(), AuthError> {
        self.outcome(format!("passwordless {email}"), ())
    }
}

fn locked_options() -> ModalOptions {
    ModalOptions { default_email: "guest@example.com".to_owned(), referral: None, disable_close: true }
}

fn signup_form(first: &str, last: &str, email: &str) -> SignupForm {
    SignupForm {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        password: "secret".to_owned(),
        referral: Some("friend-42".to_owned()),
    }
}

// =============================================================
// View routing
// =============================================================

#[test]
fn new_state_starts_on_welcome_with_default_email() {
    let state = ModalState::new(ModalOptions { default_email: "a@b.co".to_owned(), ..ModalOptions::default() });
    assert_eq!(state.view, AuthView::Welcome);
    assert_eq!(state.current_email, "a@b.co");
    assert!(state.can_close());
    assert!(!state.loading);
}

#[test]
fn each_show_method_selects_its_view() {
    let mut state = ModalState::default();
    state.show_login();
    assert_eq!(state.view, AuthView::Login);
    state.show_signup();
    assert_eq!(state.view, AuthView::Signup);
    state.show_password_reset();
    assert_eq!(state.view, AuthView::PasswordReset);
    state.show_passwordless();
    assert_eq!(state.view, AuthView::Passwordless);
    state.show_welcome();
    assert_eq!(state.view, AuthView::Welcome);
}

#[test]
fn switching_views_clears_error() {
    let mut state = ModalState::default();
    state.show_login();
    state.fail(AuthError::MissingPassword);
    state.show_password_reset();
    assert_eq!(state.error, None);
}

#[test]
fn close_resets_view_email_and_error() {
    let mut state = ModalState::new(ModalOptions { default_email: "a@b.co".to_owned(), ..ModalOptions::default() });
    state.show_login();
    state.set_email("typed@b.co");
    state.fail(AuthError::InvalidEmail);

    assert!(state.close());
    assert_eq!(state.view, AuthView::Welcome);
    assert_eq!(state.current_email, "a@b.co");
    assert_eq!(state.error, None);
}

#[test]
fn close_is_ignored_when_disabled() {
    let mut state = ModalState::new(locked_options());
    state.show_signup();
    state.fail(AuthError::MissingName);

    assert!(!state.close());
    assert_eq!(state.view, AuthView::Signup);
    assert_eq!(state.error, Some(AuthError::MissingName));
    assert!(!state.can_close());
}

#[test]
fn reset_keeps_options() {
    let mut state = ModalState::new(locked_options());
    state.show_login();
    state.reset();
    assert_eq!(state.view, AuthView::Welcome);
    assert_eq!(state.options(), &locked_options());
}

// =============================================================
// Success panel copy
// =============================================================

#[test]
fn success_title_defaults_when_absent_or_blank() {
    assert_eq!(success_title(None), "Success!");
    assert_eq!(success_title(Some("")), "Success!");
    assert_eq!(success_title(Some(ACCOUNT_CREATED_MESSAGE)), "Account created successfully!");
}

#[test]
fn success_greeting_needs_a_name() {
    assert_eq!(success_greeting(Some("Riley")).as_deref(), Some("Welcome, Riley!"));
    assert_eq!(success_greeting(Some("  ")), None);
    assert_eq!(success_greeting(None), None);
    assert_eq!(REDIRECT_MESSAGE, "Redirecting you now...");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn credentials_require_email_then_password() {
    assert_eq!(validate_credentials(" ", "pw"), Err(AuthError::MissingEmail));
    assert_eq!(validate_credentials("nobody", "pw"), Err(AuthError::InvalidEmail));
    assert_eq!(validate_credentials("a@b.co", ""), Err(AuthError::MissingPassword));
    let ok = validate_credentials("  a@b.co ", "pw").unwrap();
    assert_eq!(ok.email, "a@b.co");
}

#[test]
fn signup_requires_both_names_and_trims_them() {
    assert_eq!(validate_signup(signup_form("Ada", " ", "a@b.co")), Err(AuthError::MissingName));
    let ok = validate_signup(signup_form(" Ada ", "Lovelace", " a@b.co")).unwrap();
    assert_eq!(ok.first_name, "Ada");
    assert_eq!(ok.email, "a@b.co");
    assert_eq!(ok.referral.as_deref(), Some("friend-42"));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(AuthError::InvalidEmail.to_string(), "Please enter a valid email address");
    assert_eq!(AuthError::Rejected("Wrong password".to_owned()).to_string(), "Wrong password");
}

// =============================================================
// Requests through the auth service
// =============================================================

#[tokio::test]
async fn login_success_moves_to_success_view() {
    let auth = ScriptedAuth::default();
    let mut state = ModalState::default();
    state.show_login();

    let user = state.submit_login(&auth, "sam@example.com", "pw").await;

    assert_eq!(user.map(|u| u.id).as_deref(), Some("u1"));
    assert_eq!(state.view, AuthView::Success);
    assert!(!state.loading);
    assert_eq!(state.success_greeting().as_deref(), Some("Welcome, Sam!"));
    assert_eq!(auth.calls(), ["login sam@example.com"]);
}

#[tokio::test]
async fn rejected_login_stays_on_login_with_error() {
    let auth = ScriptedAuth::rejecting(AuthError::Rejected("Invalid login credentials".to_owned()));
    let mut state = ModalState::default();
    state.show_login();

    assert_eq!(state.submit_login(&auth, "sam@example.com", "bad").await, None);
    assert_eq!(state.view, AuthView::Login);
    assert_eq!(state.error.as_ref().map(ToString::to_string).as_deref(), Some("Invalid login credentials"));
    assert!(!state.loading);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_service() {
    let auth = ScriptedAuth::default();
    let mut state = ModalState::default();
    state.show_login();

    assert_eq!(state.submit_login(&auth, "not-an-email", "pw").await, None);
    assert_eq!(state.error, Some(AuthError::InvalidEmail));
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn request_in_flight_blocks_a_second_one() {
    let auth = ScriptedAuth::default();
    let mut state = ModalState::default();
    assert!(state.begin());

    assert_eq!(state.submit_login(&auth, "sam@example.com", "pw").await, None);
    assert!(auth.calls().is_empty());
    assert!(state.loading);
}

#[tokio::test]
async fn signup_forwards_referral() {
    let auth = ScriptedAuth::default();
    let mut state = ModalState::default();
    state.show_signup();

    let user = state.submit_signup(&auth, signup_form("Ada", "Lovelace", "ada@example.com")).await;

    assert!(user.is_some());
    assert_eq!(auth.calls(), [r#"signup ada@example.com ref=Some("friend-42")"#]);
    assert_eq!(state.success_greeting().as_deref(), Some("Welcome, Ada!"));
}

#[tokio::test]
async fn password_reset_success_returns_to_login() {
    let auth = ScriptedAuth::default();
    let mut state = ModalState::default();
    state.show_password_reset();

    assert!(state.submit_reset(&auth, "sam@example.com").await);
    assert_eq!(state.view, AuthView::Login);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn failed_passwordless_keeps_view_and_reports() {
    let auth = ScriptedAuth::rejecting(AuthError::Unavailable);
    let mut state = ModalState::default();
    state.show_passwordless();

    assert!(!state.submit_passwordless(&auth, "sam@example.com").await);
    assert_eq!(state.view, AuthView::Passwordless);
    assert_eq!(state.error, Some(AuthError::Unavailable));
}

#[tokio::test]
async fn close_after_success_is_blocked_when_disabled() {
    let auth = ScriptedAuth::default();
    let mut state = ModalState::new(locked_options());
    state.show_login();
    state.submit_login(&auth, "guest@example.com", "pw").await;

    assert!(!state.close());
    assert_eq!(state.view, AuthView::Success);
}
