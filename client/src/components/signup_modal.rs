//! Sign-up / log-in modal.
//!
//! Renders whichever panel `ModalState` routes to and forwards submissions
//! to the account backend. Close requests (button, overlay, Escape) go
//! through `ModalState::close`, so a modal opened with `disable_close`
//! cannot be dismissed.

use leptos::prelude::*;

use crate::state::signup::{
    ACCOUNT_CREATED_MESSAGE, AuthUser, AuthView, ModalOptions, ModalState, PASSWORDLESS_MESSAGE, REDIRECT_MESSAGE,
    SignupForm, success_title,
};
#[cfg(feature = "hydrate")]
use crate::state::signup::{AuthService, SUCCESS_CLOSE_DELAY, validate_credentials, validate_email, validate_signup};

#[component]
pub fn SignUpLoginModal(
    open: RwSignal<bool>,
    #[prop(optional)] options: ModalOptions,
    #[prop(optional)] on_auth_success: Option<Callback<AuthUser>>,
) -> impl IntoView {
    let state = RwSignal::new(ModalState::new(options));
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());

    let clear_inputs = move || {
        password.set(String::new());
        first_name.set(String::new());
        last_name.set(String::new());
    };

    let request_close = Callback::new(move |()| {
        if state.try_update(ModalState::close).unwrap_or(false) {
            clear_inputs();
            open.set(false);
        }
    });

    // Hidden from outside: drop whatever the last visit left behind.
    Effect::new(move || {
        if !open.get() {
            state.update(ModalState::reset);
            clear_inputs();
        }
    });

    let on_login = Callback::new(move |()| {
        let email = state.with_untracked(|s| s.current_email.clone());
        submit_login(state, email, password.get_untracked(), open, on_auth_success);
    });

    let on_signup = Callback::new(move |()| {
        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: state.with_untracked(|s| s.current_email.clone()),
            password: password.get_untracked(),
            referral: state.with_untracked(|s| s.referral().map(str::to_owned)),
        };
        submit_signup(state, form, open, on_auth_success);
    });

    let on_reset = Callback::new(move |()| {
        let email = state.with_untracked(|s| s.current_email.clone());
        submit_reset(state, email);
    });

    let on_passwordless = Callback::new(move |()| {
        let email = state.with_untracked(|s| s.current_email.clone());
        submit_passwordless(state, email);
    });

    let email_input = move || {
        view! {
            <input
                class="auth-modal__input"
                type="email"
                placeholder="Email"
                prop:value=move || state.with(|s| s.current_email.clone())
                on:input=move |ev| state.update(|s| s.set_email(&event_target_value(&ev)))
            />
        }
    };

    let password_input = move || {
        view! {
            <input
                class="auth-modal__input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
        }
    };

    let panel = move || match state.with(|s| s.view) {
        AuthView::Welcome => view! {
            <h2 id="modal-title">"Welcome to Split Lease"</h2>
            <Show when=move || state.with(|s| s.referral().is_some())>
                <p class="auth-modal__referral">"You were invited by a friend."</p>
            </Show>
            <button class="btn btn--primary" on:click=move |_| state.update(ModalState::show_login)>"Log in"</button>
            <button class="btn" on:click=move |_| state.update(ModalState::show_signup)>"Sign up"</button>
        }
        .into_any(),
        AuthView::Login => view! {
            <h2 id="modal-title">"Log in"</h2>
            {email_input}
            {password_input}
            <button class="btn btn--primary" on:click=move |_| on_login.run(()) disabled=move || state.with(|s| s.loading)>
                "Log in"
            </button>
            <button class="auth-modal__link" on:click=move |_| state.update(ModalState::show_password_reset)>
                "Forgot password?"
            </button>
            <button class="auth-modal__link" on:click=move |_| on_passwordless.run(())>"Email me a login link"</button>
            <button class="auth-modal__link" on:click=move |_| state.update(ModalState::show_signup)>
                "Need an account? Sign up"
            </button>
            <button class="auth-modal__link" on:click=move |_| state.update(ModalState::show_welcome)>"Back"</button>
        }
        .into_any(),
        AuthView::Signup => view! {
            <h2 id="modal-title">"Sign up"</h2>
            <input
                class="auth-modal__input"
                placeholder="First name"
                prop:value=move || first_name.get()
                on:input=move |ev| first_name.set(event_target_value(&ev))
            />
            <input
                class="auth-modal__input"
                placeholder="Last name"
                prop:value=move || last_name.get()
                on:input=move |ev| last_name.set(event_target_value(&ev))
            />
            {email_input}
            {password_input}
            <button class="btn btn--primary" on:click=move |_| on_signup.run(()) disabled=move || state.with(|s| s.loading)>
                "Create account"
            </button>
            <button class="auth-modal__link" on:click=move |_| state.update(ModalState::show_login)>
                "Already have an account? Log in"
            </button>
            <button class="auth-modal__link" on:click=move |_| state.update(ModalState::show_welcome)>"Back"</button>
        }
        .into_any(),
        AuthView::PasswordReset => view! {
            <h2 id="modal-title">"Reset your password"</h2>
            {email_input}
            <button class="btn btn--primary" on:click=move |_| on_reset.run(()) disabled=move || state.with(|s| s.loading)>
                "Send reset link"
            </button>
            <button class="auth-modal__link" on:click=move |_| state.update(ModalState::show_login)>"Back"</button>
        }
        .into_any(),
        AuthView::Passwordless => view! {
            <h2 id="modal-title">"Passwordless Login"</h2>
            <p>{PASSWORDLESS_MESSAGE}</p>
            <button class="btn" on:click=move |_| state.update(ModalState::show_login)>"Back to Login"</button>
        }
        .into_any(),
        AuthView::Success => view! {
            <div class="auth-success">
                <div class="auth-success__icon">"✓"</div>
                <h2 id="modal-title">{success_title(Some(ACCOUNT_CREATED_MESSAGE)).to_owned()}</h2>
                {move || state.with(ModalState::success_greeting).map(|line| view! { <p class="auth-success__subtitle">{line}</p> })}
                <p class="auth-success__message">{REDIRECT_MESSAGE}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <Show when=move || open.get()>
            <div class="auth-modal__overlay" aria-hidden="true" on:click=move |_| request_close.run(())></div>
            <div
                class="auth-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                tabindex="-1"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        request_close.run(());
                    }
                }
            >
                <Show when=move || state.with(ModalState::can_close)>
                    <button class="auth-modal__close" aria-label="Close" on:click=move |_| request_close.run(())>
                        "×"
                    </button>
                </Show>
                <div class="auth-modal__content">
                    {panel}
                    <Show when=move || state.with(|s| s.error.is_some())>
                        <p class="auth-modal__error">
                            {move || state.with(|s| s.error.as_ref().map(ToString::to_string).unwrap_or_default())}
                        </p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// After a successful login or sign-up: hold the success panel, report the
/// user, then close (a locked modal stays open on the success panel).
#[cfg(feature = "hydrate")]
async fn finish_success(
    state: RwSignal<ModalState>,
    user: AuthUser,
    open: RwSignal<bool>,
    on_auth_success: Option<Callback<AuthUser>>,
) {
    log::info!("auth succeeded for {}", user.id);
    gloo_timers::future::sleep(SUCCESS_CLOSE_DELAY).await;
    if let Some(callback) = on_auth_success {
        callback.run(user);
    }
    if state.try_update(ModalState::close).unwrap_or(false) {
        open.set(false);
    }
}

fn submit_login(
    state: RwSignal<ModalState>,
    email: String,
    password: String,
    open: RwSignal<bool>,
    on_auth_success: Option<Callback<AuthUser>>,
) {
    #[cfg(feature = "hydrate")]
    {
        let credentials = match validate_credentials(&email, &password) {
            Ok(credentials) => credentials,
            Err(e) => return state.update(|s| s.fail(e)),
        };
        if !state.try_update(ModalState::begin).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::DemoAuth.login(&credentials).await;
            if let Some(user) = state.try_update(|s| s.finish_auth(result)).flatten() {
                finish_success(state, user, open, on_auth_success).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, email, password, open, on_auth_success);
}

fn submit_signup(
    state: RwSignal<ModalState>,
    form: SignupForm,
    open: RwSignal<bool>,
    on_auth_success: Option<Callback<AuthUser>>,
) {
    #[cfg(feature = "hydrate")]
    {
        let form = match validate_signup(form) {
            Ok(form) => form,
            Err(e) => return state.update(|s| s.fail(e)),
        };
        if !state.try_update(ModalState::begin).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::DemoAuth.signup(&form).await;
            if let Some(user) = state.try_update(|s| s.finish_auth(result)).flatten() {
                finish_success(state, user, open, on_auth_success).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, form, open, on_auth_success);
}

fn submit_reset(state: RwSignal<ModalState>, email: String) {
    #[cfg(feature = "hydrate")]
    {
        let email = match validate_email(&email) {
            Ok(email) => email,
            Err(e) => return state.update(|s| s.fail(e)),
        };
        if !state.try_update(ModalState::begin).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::DemoAuth.reset_password(&email).await;
            state.update(|s| {
                s.finish_reset(result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, email);
}

fn submit_passwordless(state: RwSignal<ModalState>, email: String) {
    #[cfg(feature = "hydrate")]
    {
        let email = match validate_email(&email) {
            Ok(email) => email,
            Err(e) => return state.update(|s| s.fail(e)),
        };
        if !state.try_update(ModalState::begin).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::DemoAuth.passwordless_login(&email).await;
            if state.try_update(|s| s.finish_passwordless(result)).unwrap_or(false) {
                state.update(ModalState::show_passwordless);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, email);
}
