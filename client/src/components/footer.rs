//! Site footer with the refer-a-friend and import-listing forms.

use leptos::prelude::*;

use crate::state::footer::{
    FooterFormError, ReferralMethod, SubmitPhase, validate_import, validate_referral,
};
#[cfg(feature = "hydrate")]
use crate::state::footer::{IMPORT_BUSY_DELAY, IMPORT_CONFIRM_DELAY, SHARE_CONFIRM_DELAY};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let method = RwSignal::new(ReferralMethod::default());
    let contact = RwSignal::new(String::new());
    let share_phase = RwSignal::new(SubmitPhase::Idle);
    let share_error = RwSignal::new(None::<FooterFormError>);

    let import_url = RwSignal::new(String::new());
    let import_email = RwSignal::new(String::new());
    let import_phase = RwSignal::new(SubmitPhase::Idle);
    let import_error = RwSignal::new(None::<FooterFormError>);

    let select_method = move |next: ReferralMethod| {
        method.set(next);
        contact.set(String::new());
        share_error.set(None);
    };

    let on_share = move |_| {
        if share_phase.get().is_busy() {
            return;
        }
        match validate_referral(method.get(), &contact.get()) {
            Err(e) => share_error.set(Some(e)),
            Ok(referral) => {
                share_error.set(None);
                share_phase.set(SubmitPhase::Working);
                #[cfg(feature = "hydrate")]
                {
                    log::info!("referral submitted: method={} contact={}", referral.method.as_str(), referral.contact);
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(SHARE_CONFIRM_DELAY).await;
                        share_phase.set(SubmitPhase::Idle);
                        contact.set(String::new());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = referral;
            }
        }
    };

    let on_import = move |_| {
        if import_phase.get().is_busy() {
            return;
        }
        match validate_import(&import_url.get(), &import_email.get()) {
            Err(e) => import_error.set(Some(e)),
            Ok(request) => {
                import_error.set(None);
                import_phase.set(SubmitPhase::Working);
                #[cfg(feature = "hydrate")]
                {
                    log::info!("listing import submitted: url={} email={}", request.url, request.email);
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(IMPORT_BUSY_DELAY).await;
                        import_phase.set(SubmitPhase::Done);
                        gloo_timers::future::sleep(IMPORT_CONFIRM_DELAY).await;
                        import_phase.set(SubmitPhase::Idle);
                        import_url.set(String::new());
                        import_email.set(String::new());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = request;
            }
        }
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__column">
                <h3 class="site-footer__heading">"Refer a friend"</h3>
                <div class="referral-options">
                    <label>
                        <input
                            type="radio"
                            name="referral-method"
                            value="email"
                            prop:checked=move || method.get() == ReferralMethod::Email
                            on:change=move |_| select_method(ReferralMethod::Email)
                        />
                        "Email"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="referral-method"
                            value="text"
                            prop:checked=move || method.get() == ReferralMethod::Text
                            on:change=move |_| select_method(ReferralMethod::Text)
                        />
                        "Text"
                    </label>
                </div>
                <input
                    class="referral-input"
                    type=move || method.get().input_type()
                    placeholder=move || method.get().placeholder()
                    prop:value=move || contact.get()
                    on:input=move |ev| contact.set(event_target_value(&ev))
                />
                <button class="share-btn" on:click=on_share disabled=move || share_phase.get().is_busy()>
                    {move || share_phase.get().share_label()}
                </button>
                <Show when=move || share_error.get().is_some()>
                    <p class="site-footer__error">
                        {move || share_error.get().map(|e| e.to_string()).unwrap_or_default()}
                    </p>
                </Show>
            </div>

            <div class="site-footer__column">
                <h3 class="site-footer__heading">"Import your listing"</h3>
                <input
                    class="import-url-input"
                    type="url"
                    placeholder="https://your-listing-url"
                    prop:value=move || import_url.get()
                    on:input=move |ev| import_url.set(event_target_value(&ev))
                />
                <input
                    class="import-email-input"
                    type="email"
                    placeholder="Your email"
                    prop:value=move || import_email.get()
                    on:input=move |ev| import_email.set(event_target_value(&ev))
                />
                <button class="import-btn" on:click=on_import disabled=move || import_phase.get().is_busy()>
                    {move || import_phase.get().import_label()}
                </button>
                <Show when=move || import_error.get().is_some()>
                    <p class="site-footer__error">
                        {move || import_error.get().map(|e| e.to_string()).unwrap_or_default()}
                    </p>
                </Show>
            </div>

            <div class="site-footer__legal">
                <a href="/policies">"Policies"</a>
                <span>"© Split Lease"</span>
            </div>
        </footer>
    }
}
