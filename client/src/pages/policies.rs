//! Policies page: sidebar of documents next to an embedded document viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydration the page builds a `ViewerController` over the policies API,
//! a `SignalView` bound to this page's state, and the browser address bar.
//! Sidebar clicks, back/forward, fragment edits, and resizes are forwarded
//! to the controller; rendering reads the page state signal only. "Try
//! again" on the error pane resets the server cache, then reloads the
//! controller's catalog.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{footer::SiteFooter, policy_nav::PolicyNav, signup_modal::SignUpLoginModal};
use crate::state::policies_page::{PoliciesPageState, VIEWER_CONTAINER_ID};
use crate::util::browser;

#[component]
pub fn PoliciesPage() -> impl IntoView {
    let state = RwSignal::new(PoliciesPageState::default());
    let selected = RwSignal::new(None::<String>);
    let back_to_top = RwSignal::new(false);
    let reloads = RwSignal::new(0_u32);
    let auth_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    start_viewer(state, selected, reloads, back_to_top);

    let on_select = Callback::new(move |slug: String| selected.set(Some(slug)));

    view! {
        <Title text=move || state.with(|s| s.document_title.clone())/>
        <div class="policies-page">
            <header class="policies-header">
                <a href="/" class="policies-header__brand">"Split Lease"</a>
                <button class="policies-header__signin" on:click=move |_| auth_open.set(true)>
                    "Sign In / Sign Up"
                </button>
            </header>

            <div class="policies-layout">
                <aside class="policies-sidebar">
                    <h2 class="policies-sidebar__title">"Policies"</h2>
                    <PolicyNav state=state on_select=on_select/>
                </aside>

                <main class="policies-content">
                    <div class="policies-content__bar">
                        <h1 id="policyTitle">{move || state.with(|s| s.heading.clone())}</h1>
                        <Show when=move || state.with(|s| s.download_href.is_some())>
                            <a
                                id="downloadLink"
                                class="download-link"
                                href=move || state.with(|s| s.download_href.clone().unwrap_or_default())
                                target="_blank"
                                rel="noopener"
                            >
                                "Download PDF"
                            </a>
                        </Show>
                    </div>

                    <Show when=move || state.with(|s| s.notice.is_some())>
                        <p class="policies-notice">{move || state.with(|s| s.notice.clone().unwrap_or_default())}</p>
                    </Show>

                    <div class="pdf-container">
                        <Show
                            when=move || state.with(|s| s.error_message().is_some())
                            fallback=move || {
                                view! {
                                    <iframe
                                        id=VIEWER_CONTAINER_ID
                                        class="pdf-viewer"
                                        title="Policy document"
                                        src=move || state.with(|s| s.document_url().unwrap_or("about:blank").to_owned())
                                    ></iframe>
                                }
                            }
                        >
                            <div class="error">
                                <p>{move || state.with(|s| s.error_message().unwrap_or_default().to_owned())}</p>
                                <button class="error__retry" on:click=move |_| reloads.update(|n| *n += 1)>
                                    "Try again"
                                </button>
                            </div>
                        </Show>
                    </div>
                </main>
            </div>

            <button
                id="backToTop"
                class=move || if back_to_top.get() { "back-to-top back-to-top--visible" } else { "back-to-top" }
                aria-label="Back to top"
                on:click=move |_| browser::scroll_to_top()
            >
                "↑"
            </button>

            <SiteFooter/>
            <SignUpLoginModal open=auth_open/>
        </div>
    }
}

/// Build the viewer controller and hook it to page events.
#[cfg(feature = "hydrate")]
fn start_viewer(
    state: RwSignal<PoliciesPageState>,
    selected: RwSignal<Option<String>>,
    reloads: RwSignal<u32>,
    back_to_top: RwSignal<bool>,
) {
    use std::rc::Rc;

    use futures::lock::Mutex;
    use policies::{Catalog, ViewerConfig, ViewerController};

    use crate::net::api::ApiPolicySource;
    use crate::state::policies_page::{SignalView, back_to_top_visible};
    use crate::util::browser::BrowserAddressBar;

    let controller = ViewerController::new(
        Catalog::new(ApiPolicySource::default()),
        SignalView::new(state),
        BrowserAddressBar,
        ViewerConfig::default(),
    )
    .with_viewport_width(browser::viewport_width());
    let controller = Rc::new(Mutex::new(controller));

    // Init once the markup is mounted so the container check sees it.
    {
        let controller = Rc::clone(&controller);
        Effect::new(move || {
            let controller = Rc::clone(&controller);
            leptos::task::spawn_local(async move {
                if let Err(e) = controller.lock().await.init().await {
                    log::error!("policies viewer failed to start: {e}");
                }
            });
        });
    }

    {
        let controller = Rc::clone(&controller);
        Effect::new(move || {
            let Some(slug) = selected.get() else {
                return;
            };
            let controller = Rc::clone(&controller);
            leptos::task::spawn_local(async move {
                let outcome = controller.lock().await.on_navigate(&slug).await;
                log::debug!("navigate to {slug}: {outcome:?}");
            });
        });
    }

    {
        let controller = Rc::clone(&controller);
        Effect::new(move || {
            if reloads.get() == 0 {
                return;
            }
            let controller = Rc::clone(&controller);
            leptos::task::spawn_local(async move {
                let mut controller = controller.lock().await;
                if let Err(e) = controller.catalog().source().request_refresh().await {
                    log::warn!("server policy refresh failed: {e}");
                }
                controller.refresh().await;
            });
        });
    }

    {
        let controller = Rc::clone(&controller);
        browser::on_window_event("popstate", move || {
            let controller = Rc::clone(&controller);
            leptos::task::spawn_local(async move {
                controller.lock().await.on_pop_state().await;
            });
        });
    }

    {
        let controller = Rc::clone(&controller);
        browser::on_window_event("hashchange", move || {
            let controller = Rc::clone(&controller);
            leptos::task::spawn_local(async move {
                controller.lock().await.on_hash_change().await;
            });
        });
    }

    browser::on_window_event("resize", move || {
        let width = browser::viewport_width();
        let controller = Rc::clone(&controller);
        leptos::task::spawn_local(async move {
            controller.lock().await.on_resize(width);
        });
    });

    browser::on_window_event("scroll", move || back_to_top.set(back_to_top_visible(browser::scroll_y())));
}
